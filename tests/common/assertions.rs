//! Custom assertion macros and utilities
//!
//! Provides assertion helpers with more descriptive failure output.

use axum::http::StatusCode;
use serde_json::Value;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a response is a JSON error of the given kind
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, kind: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["error"], kind, "unexpected error kind, body: {body}");
    assert_eq!(body["status"], expected.as_u16());
    assert!(body["message"].is_string(), "error body has no message: {body}");
}
