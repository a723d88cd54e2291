//! Authentication test helpers
//!
//! Provides utilities for creating test users and obtaining tokens through
//! the public endpoints.

use axum::http::StatusCode;
use serde_json::json;

use super::app::TestApp;

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Sign up and log in through the API, returning the issued token
pub async fn create_test_user(app: &TestApp, username: &str, password: &str) -> TestUser {
    let credentials = json!({ "username": username, "password": password });

    let (status, body) = app.post_json("/api/auth/signup", &credentials).await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {body}");

    let (status, body) = app.post_json("/api/auth/login", &credentials).await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");

    let token = body["token"]
        .as_str()
        .expect("login response has a token")
        .to_string();

    TestUser {
        username: username.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
