//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and middleware,
//! and its conversion into JSON HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and From conversions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use coursehub::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<Vec<String>>, BackendError> {
//!     Err(BackendError::NotFound)
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::BackendError;
