/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username and password
 * 2. Hash password using bcrypt (off the request task)
 * 3. Insert the user; the UNIQUE constraint decides duplicates
 * 4. Return 201 with a confirmation message
 *
 * Signup does not log the caller in; a token comes from /api/auth/login.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{CredentialsRequest, MessageResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{create_user, UserStoreError};
use crate::backend::error::BackendError;

/// Sign up handler
///
/// # Errors
///
/// * `400 InvalidRequest` - malformed body, empty username or password
/// * `400 DuplicateUsername` - username already registered
/// * `500 StoreUnavailable` - database failure
/// * `500 Internal` - hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw1" }
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::info!("Signup request for username: {}", request.username);

    request.validate_for_signup().map_err(|e| {
        tracing::warn!("Rejected signup for {}: {}", request.username, e);
        BackendError::from(e)
    })?;

    let password_hash = hasher.hash_async(request.password).await?;

    let user = create_user(&pool, &request.username, &password_hash)
        .await
        .map_err(|e| {
            if let UserStoreError::DuplicateUsername = e {
                tracing::warn!("Username already exists: {}", request.username);
            }
            BackendError::from(e)
        })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully".to_string(),
        }),
    ))
}
