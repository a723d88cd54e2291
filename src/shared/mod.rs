//! Shared Module
//!
//! Types that do not depend on the HTTP layer: the content collections and
//! their documents, server configuration, and shared error types.

/// Course content collections and document types
pub mod content;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use content::{Collection, Document};
pub use error::SharedError;
