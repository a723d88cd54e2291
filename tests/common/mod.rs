//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application fixture
//! - Request builders and response readers
//! - Authentication test helpers
//! - Custom assertion macros

pub mod app;
pub mod assertions;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use app::*;
pub use auth_helpers::*;
