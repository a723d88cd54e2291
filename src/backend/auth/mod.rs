//! Authentication Module
//!
//! This module handles user registration, login and bearer token handling.
//!
//! # Architecture
//!
//! - **`users`** - Credential store (user rows in SQLite)
//! - **`password`** - bcrypt password hasher
//! - **`sessions`** - JWT issuing and verification
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! The auth gate that protects routes lives in `backend::middleware::auth`.
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username and password → hash → user created → 201
//! 2. **Login**: username lookup → password verified → token returned
//! 3. **Protected request**: token verified by the gate → handler runs
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs that expire after one hour
//! - Invalid credentials return 401 without saying which part was wrong
//!
//! # Example
//!
//! ```rust,no_run
//! use coursehub::backend::auth::{signup, login};
//! use coursehub::backend::server::state::AppState;
//! use axum::{routing::post, Router};
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/api/auth/signup", post(signup))
//!     .route("/api/auth/login", post(login))
//!     .with_state(state);
//! # }
//! ```

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{CredentialsRequest, TokenResponse, UserResponse};
pub use handlers::{get_me, login, protected, signup};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenError, TokenKeys};
