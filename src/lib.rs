//! CourseHub - Main Library
//!
//! CourseHub is a small content API built with Rust. It serves read-only
//! course collections (`ageofai`, `devtools`, `webdev`, `road`, `tools`,
//! `working`) and media assets, and puts username/password accounts with
//! signed bearer tokens in front of the protected routes.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the HTTP layer
//!   - Collection names and document types
//!   - Server configuration
//!   - Error types
//!
//! - **`backend`** - The Axum server
//!   - Signup, login and token verification
//!   - Auth gate middleware for protected routes
//!   - Collection read endpoints and static assets
//!   - SQLite persistence through sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use coursehub::backend::server::init::create_app;
//! use coursehub::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username and password → bcrypt hash → user row created
//! 2. **Login**: username lookup → bcrypt verify → HS256 token (one hour)
//! 3. **Protected request**: `Authorization` header → token verified → handler
//!
//! Tokens are stateless. Nothing is stored per session, so a token stays
//! valid until it expires.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
