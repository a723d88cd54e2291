//! Content API integration tests
//!
//! Tests for the read-only collection endpoints.

use axum::http::StatusCode;
use serde_json::json;

use coursehub::backend::content::insert_document;
use coursehub::shared::content::{AgeOfAiEntry, ArticleEntry, Collection, CourseEntry};

use crate::common::assertions::assert_error;
use crate::common::{auth_header, create_test_user, TestApp};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_every_collection_starts_empty() {
    let app = TestApp::new().await;

    for collection in Collection::ALL {
        let (status, body) = app.get(&format!("/api/{collection}"), None).await;
        assert_eq!(status, StatusCode::OK, "collection {collection}");
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn test_course_documents_keep_wire_field_names() {
    let app = TestApp::new().await;
    let course = CourseEntry {
        title: "Rust for Web".to_string(),
        overview: strings(&["Intro"]),
        course_details: strings(&["Week 1"]),
        keypoints: strings(&["Ownership"]),
        image_url: strings(&["/api/images/rust.png"]),
        video_url: strings(&["/api/videos/rust.mp4"]),
    };
    let id = insert_document(app.pool(), Collection::DevTools, &course)
        .await
        .unwrap();

    let (status, body) = app.get("/api/devtools", None).await;
    assert_eq!(status, StatusCode::OK);
    pretty_assertions::assert_eq!(
        body,
        json!([{
            "_id": id.to_string(),
            "title": "Rust for Web",
            "overview": ["Intro"],
            "CourseDetails": ["Week 1"],
            "keypoints": ["Ownership"],
            "imageURL": ["/api/images/rust.png"],
            "videoURL": ["/api/videos/rust.mp4"],
        }])
    );
}

#[tokio::test]
async fn test_collections_are_isolated_and_ordered() {
    let app = TestApp::new().await;

    for title in ["first", "second", "third"] {
        let entry = ArticleEntry {
            title: title.to_string(),
            ..Default::default()
        };
        insert_document(app.pool(), Collection::WebDev, &entry)
            .await
            .unwrap();
    }
    let road = ArticleEntry {
        title: "roadmap".to_string(),
        ..Default::default()
    };
    insert_document(app.pool(), Collection::Road, &road).await.unwrap();

    let (_, webdev) = app.get("/api/webdev", None).await;
    let titles: Vec<&str> = webdev
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);

    let (_, road) = app.get("/api/road", None).await;
    assert_eq!(road.as_array().unwrap().len(), 1);
    assert_eq!(road[0]["title"], "roadmap");
}

#[tokio::test]
async fn test_collections_do_not_require_a_token() {
    let app = TestApp::new().await;
    let entry = AgeOfAiEntry {
        title: "Transformers".to_string(),
        ..Default::default()
    };
    insert_document(app.pool(), Collection::AgeOfAi, &entry)
        .await
        .unwrap();
    let user = create_test_user(&app, "reader", "pw").await;

    let (anonymous_status, anonymous) = app.get("/api/ageofai", None).await;
    let (authed_status, authed) = app
        .get("/api/ageofai", Some(&auth_header(&user.token)))
        .await;

    assert_eq!(anonymous_status, StatusCode::OK);
    assert_eq!(authed_status, StatusCode::OK);
    assert_eq!(anonymous, authed);
}

#[tokio::test]
async fn test_unknown_collection_is_not_found() {
    let app = TestApp::new().await;

    for name in ["users", "documents", "DevTools", "devtool"] {
        let (status, body) = app.get(&format!("/api/{name}"), None).await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "CollectionNotFound");
    }
}

#[tokio::test]
async fn test_document_without_title_is_served() {
    let app = TestApp::new().await;
    sqlx::query("INSERT INTO documents (id, collection, body, created_at) VALUES (?, ?, ?, ?)")
        .bind(uuid::Uuid::new_v4())
        .bind("tools")
        .bind(r#"{"overview":["x"]}"#)
        .bind(chrono::Utc::now())
        .execute(app.pool())
        .await
        .unwrap();

    let (status, body) = app.get("/api/tools", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "");
    assert_eq!(body[0]["overview"], json!(["x"]));
}
