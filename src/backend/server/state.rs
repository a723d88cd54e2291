/**
 * Application State Management
 *
 * `AppState` is built once at startup from `ServerConfig` and cloned into
 * every request. It holds only things that never change after startup:
 * the connection pool, the token keys and the password hasher.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for just the part they use:
 *
 * ```rust
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // ...
 * }
 * ```
 */

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenKeys;
use crate::shared::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Connection pool for users and content
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub token_keys: Arc<TokenKeys>,

    /// bcrypt hasher with the configured cost
    pub password_hasher: PasswordHasher,

    /// Directory served under `/api/images` and `/api/videos`
    pub assets_dir: PathBuf,
}

impl AppState {
    /// Build the state from an open pool and the server configuration
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            token_keys: Arc::new(TokenKeys::from_secret(&config.jwt_secret)),
            password_hasher: PasswordHasher::new(config.bcrypt_cost),
            assets_dir: config.assets_dir.clone(),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_keys.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.password_hasher
    }
}
