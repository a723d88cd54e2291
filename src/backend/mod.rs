//! Backend Module
//!
//! All server-side code for the coursehub API: an Axum HTTP server with
//! username/password accounts, bearer-token sessions and read-only course
//! content collections.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, tokens, auth handlers
//! - **`middleware`** - The bearer-token gate
//! - **`content`** - Collection storage and listing
//! - **`error`** - `BackendError` and its JSON response shape
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── content/        - Content collections
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Every fallible handler returns `Result<_, BackendError>`. Lower layers
//! have their own error enums which convert into `BackendError` with `?`;
//! database details are logged, never sent to the client.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Course content collections
pub mod content;

pub use error::BackendError;
pub use server::create_app;
