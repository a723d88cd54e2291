//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request and response types
//! ├── signup.rs     - User registration handler
//! ├── login.rs      - User authentication handler
//! ├── me.rs         - Get current user handler
//! └── protected.rs  - Protected route handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Current user info (gated)
//! - **`protected`** - GET /api/protected - Identity echo (gated)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Protected route handler
pub mod protected;

// Re-export commonly used types
pub use types::{CredentialsRequest, MessageResponse, ProtectedResponse, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use protected::protected;
pub use signup::signup;
