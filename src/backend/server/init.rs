/**
 * Server Initialization
 *
 * Opens the database, builds `AppState` from the validated configuration
 * and hands it to the router.
 *
 * # Initialization Process
 *
 * 1. Connect the pool and apply migrations
 * 2. Import the content seed file, if one is configured
 * 3. Derive token keys and the password hasher from `ServerConfig`
 * 4. Create and configure the router
 *
 * A database that cannot be opened is fatal; the server does not start
 * without its credential store. So is a seed file that cannot be imported.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::content::seed::{import_seed_file, SeedError};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Startup failures
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database setup failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("content seed failed: {0}")]
    Seed(#[from] SeedError),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError` if the database cannot be opened or migrated, or
/// the configured seed file cannot be imported.
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing coursehub backend server");

    let db_pool = connect_database(&config.database_url).await?;
    tracing::info!(database_url = %config.database_url, "Database ready");

    if let Some(seed_file) = &config.seed_file {
        import_seed_file(&db_pool, seed_file).await?;
    }

    let app_state = AppState::new(db_pool, config);
    let app = create_router(app_state);

    tracing::info!(assets_dir = %config.assets_dir.display(), "Router configured");
    Ok(app)
}
