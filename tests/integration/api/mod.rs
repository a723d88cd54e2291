//! API integration tests
//!
//! Integration tests for all API endpoints

mod content_test;
