//! Application test fixture
//!
//! Builds the full router over an in-memory SQLite database, so every test
//! gets a fresh store and nothing touches the network.

use std::path::Path;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use secrecy::SecretString;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use coursehub::backend::routes::create_router;
use coursehub::backend::server::config::connect_memory_database;
use coursehub::backend::server::AppState;
use coursehub::shared::ServerConfig;

/// Signing secret shared by every test app
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Build a configuration for tests: cheap bcrypt cost, temporary assets
pub fn test_config(assets_dir: &Path) -> ServerConfig {
    ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(SecretString::from(TEST_SECRET.to_string()))
        .assets_dir(assets_dir)
        .bcrypt_cost(4)
        .build()
        .expect("test configuration is valid")
}

/// A running application with its store and asset directory
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub assets: TempDir,
}

impl TestApp {
    /// Create a new application over a fresh in-memory store
    pub async fn new() -> Self {
        let assets = tempfile::tempdir().expect("Failed to create asset directory");
        let config = test_config(assets.path());
        let pool = connect_memory_database()
            .await
            .expect("Failed to open in-memory database");

        let state = AppState::new(pool, &config);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            assets,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.db_pool
    }

    /// Send a request and return status, headers and raw body
    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        (status, headers, body)
    }

    /// Send a request and parse the body as JSON
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, _, body) = self.send_raw(request).await;
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("response body is not JSON")
        };
        (status, json)
    }

    /// POST a JSON value
    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(json_request(Method::POST, uri, body.to_string()))
            .await
    }

    /// GET with an optional raw `Authorization` header value
    pub async fn get(&self, uri: &str, authorization: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        self.send(builder.body(Body::empty()).expect("valid request"))
            .await
    }
}

/// Build a request with a JSON content type and an arbitrary body
pub fn json_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("valid request")
}
