//! Server configuration module
//!
//! Provides the configuration struct that is built once at startup and handed
//! to every component that needs it. Values come from environment variables
//! (a `.env` file is loaded by the binary before this runs).
//!
//! | Variable       | Default                 |
//! |----------------|-------------------------|
//! | `PORT`         | `5000`                  |
//! | `DATABASE_URL` | `sqlite://coursehub.db` |
//! | `JWT_SECRET`   | required                |
//! | `ASSETS_DIR`   | `assets`                |
//! | `BCRYPT_COST`  | `10`                    |
//! | `SEED_FILE`    | unset                   |

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://coursehub.db";

/// Default directory served under `/api/images` and `/api/videos`
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lifetime of an issued bearer token, in seconds
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// Secrets shorter than this are accepted, but logged as weak
pub const RECOMMENDED_SECRET_LEN: usize = 32;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
    /// sqlx connection string for the document store
    pub database_url: String,
    /// HMAC key for signing bearer tokens
    pub jwt_secret: SecretString,
    /// Directory holding image and video assets
    pub assets_dir: PathBuf,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// JSON file of collection documents imported at startup
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(port) = lookup("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
            builder = builder.port(port);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(SecretString::from(secret));
        }
        if let Some(dir) = lookup("ASSETS_DIR") {
            builder = builder.assets_dir(dir);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            let parsed = cost
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue { key: "BCRYPT_COST", value: cost })?;
            builder = builder.bcrypt_cost(parsed);
        }
        if let Some(path) = lookup("SEED_FILE").filter(|p| !p.trim().is_empty()) {
            builder = builder.seed_file(path);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }

        let secret = self.jwt_secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if secret.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                "JWT_SECRET is {} bytes; at least {} are recommended",
                secret.len(),
                RECOMMENDED_SECRET_LEN
            );
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<SecretString>,
    assets_dir: Option<PathBuf>,
    bcrypt_cost: Option<u32>,
    seed_file: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: SecretString) -> Self {
        self.jwt_secret = Some(secret);
        self
    }

    /// Set the static asset directory
    pub fn assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the content seed file
    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }

    /// Build and validate the configuration
    ///
    /// There is no fallback signing key: a missing secret is an error.
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            assets_dir: self
                .assets_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            seed_file: self.seed_file,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
