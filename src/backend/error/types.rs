/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler and by
 * the auth gate. Each variant maps to one HTTP status and one stable kind
 * string that clients can match on.
 *
 * # Error Categories
 *
 * ## Credential Errors
 *
 * - `DuplicateUsername` - signup for a username that is taken
 * - `AuthenticationFailed` - unknown username or wrong password (not
 *   distinguished, so usernames cannot be enumerated)
 *
 * ## Token Errors
 *
 * - `MissingCredential` - no `Authorization` header
 * - `InvalidToken` - bad signature or malformed token
 * - `ExpiredToken` - valid signature, expiry passed
 *
 * ## Store Errors
 *
 * - `StoreUnavailable` - any fault from the underlying database
 *
 * Messages are fixed strings. Details of the underlying fault are logged,
 * never returned.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::UserStoreError;
use crate::backend::content::db::ContentStoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use coursehub::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::invalid_request("username must not be empty");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    /// Request body could not be parsed or failed validation
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Human-readable error message
        message: String,
    },

    /// A principal with this username already exists
    #[error("Username already exists")]
    DuplicateUsername,

    /// Unknown username or wrong password
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// No bearer token was presented
    #[error("Missing credential")]
    MissingCredential,

    /// Token signature or structure is invalid
    #[error("Invalid token")]
    InvalidToken,

    /// Token signature is valid but the token has expired
    #[error("Expired token")]
    ExpiredToken,

    /// Collection name outside the served set
    #[error("Collection not found: {name}")]
    CollectionNotFound {
        /// The requested name
        name: String,
    },

    /// No route or resource matched
    #[error("Not found")]
    NotFound,

    /// The document store failed
    #[error("Store unavailable")]
    StoreUnavailable,

    /// Any other server-side failure (hashing, signing)
    #[error("Internal error")]
    Internal,
}

impl BackendError {
    /// Create a new invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidRequest`, `DuplicateUsername` - 400 Bad Request
    /// - credential and token errors - 401 Unauthorized
    /// - `CollectionNotFound`, `NotFound` - 404 Not Found
    /// - `StoreUnavailable`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } | Self::DuplicateUsername => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed
            | Self::MissingCredential
            | Self::InvalidToken
            | Self::ExpiredToken => StatusCode::UNAUTHORIZED,
            Self::CollectionNotFound { .. } | Self::NotFound => StatusCode::NOT_FOUND,
            Self::StoreUnavailable | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } => "InvalidRequest",
            Self::DuplicateUsername => "DuplicateUsername",
            Self::AuthenticationFailed => "AuthenticationFailed",
            Self::MissingCredential => "MissingCredential",
            Self::InvalidToken => "InvalidToken",
            Self::ExpiredToken => "ExpiredToken",
            Self::CollectionNotFound { .. } => "CollectionNotFound",
            Self::NotFound => "NotFound",
            Self::StoreUnavailable => "StoreUnavailable",
            Self::Internal => "Internal",
        }
    }

    /// Get the error message
    ///
    /// Safe to show to clients.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidRequest { message } => message.clone(),
            Self::DuplicateUsername => "Username already exists".to_string(),
            Self::AuthenticationFailed => "Invalid username or password".to_string(),
            Self::MissingCredential => "Authorization header is required".to_string(),
            Self::InvalidToken => "Token is invalid".to_string(),
            Self::ExpiredToken => "Token has expired".to_string(),
            Self::CollectionNotFound { .. } => "Collection not found".to_string(),
            Self::NotFound => "Not Found".to_string(),
            Self::StoreUnavailable => "The content store is unavailable".to_string(),
            Self::Internal => "An internal error occurred".to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::InvalidRequest { message },
            SharedError::UnknownCollection { name } => Self::CollectionNotFound { name },
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::invalid_request("Request body must be a JSON object with username and password")
    }
}

impl From<UserStoreError> for BackendError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::DuplicateUsername => Self::DuplicateUsername,
            UserStoreError::Database(e) => {
                tracing::error!("User store error: {:?}", e);
                Self::StoreUnavailable
            }
        }
    }
}

impl From<ContentStoreError> for BackendError {
    fn from(err: ContentStoreError) -> Self {
        match err {
            ContentStoreError::Database(_) => Self::StoreUnavailable,
            ContentStoreError::WrongCollection(_) => Self::Internal,
        }
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        Self::StoreUnavailable
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::ExpiredToken,
            TokenError::Invalid => Self::InvalidToken,
            TokenError::Signing(e) => {
                tracing::error!("Failed to sign token: {:?}", e);
                Self::Internal
            }
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        tracing::error!("Password hashing failed: {:?}", err);
        Self::Internal
    }
}
