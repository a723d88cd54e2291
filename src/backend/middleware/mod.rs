//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - Auth gate for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use coursehub::backend::auth::protected;
//! use coursehub::backend::middleware::auth_middleware;
//! use coursehub::backend::server::state::AppState;
//!
//! # fn example(state: AppState) {
//! let router: Router<AppState> = Router::new()
//!     .route("/api/protected", get(protected))
//!     .route_layer(from_fn_with_state(state, auth_middleware));
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AuthenticatedUser};
