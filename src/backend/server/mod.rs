//! Server Module
//!
//! Initialization and shared state for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database connection and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ServerConfig` is loaded and validated by the binary
//! 2. **Database**: the SQLite pool is opened, migrated and optionally seeded
//! 3. **State**: token keys and the hasher are derived from the configuration
//! 4. **Router**: routes and layers are attached to the state
//!
//! # Example
//!
//! ```rust,no_run
//! use coursehub::backend::server::create_app;
//! use coursehub::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database connection setup
pub mod config;

/// Server initialization
pub mod init;

pub use init::{create_app, StartupError};
pub use state::AppState;
