//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation and layers
//! ├── api_routes.rs     - Auth and gated routes
//! └── content_routes.rs - Collection routes
//! ```
//!
//! # Routes
//!
//! - `GET /` - Welcome text
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/me` - Current user (gated)
//! - `GET /api/protected` - Identity echo (gated)
//! - `GET /api/{collection}` - Collection documents
//! - `GET /api/images/*`, `GET /api/videos/*` - Static assets

/// Main router creation
pub mod router;

/// Auth and gated routes
pub mod api_routes;

/// Collection routes
pub mod content_routes;

pub use router::create_router;
