//! Shared Error Types
//!
//! This module defines error types that are shared between the content model,
//! the configuration layer and the backend handlers.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed validation
//! - `UnknownCollection` - A collection name outside the served set
//!
//! # Usage
//!
//! ```rust
//! use coursehub::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "username must not be empty");
//! ```
use thiserror::Error;

/// Shared error types used across the crate
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A collection name that is not part of the served set
    #[error("Unknown collection: {name}")]
    UnknownCollection {
        /// The name as requested
        name: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown collection error
    pub fn unknown_collection(name: impl Into<String>) -> Self {
        Self::UnknownCollection { name: name.into() }
    }
}
