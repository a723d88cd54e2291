/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a bearer token for the user's id
 *
 * Unknown usernames and wrong passwords produce the same
 * `AuthenticationFailed` response, and both pay for one bcrypt run.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{CredentialsRequest, TokenResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 InvalidRequest` - malformed body
/// * `401 AuthenticationFailed` - unknown user or wrong password
/// * `500 StoreUnavailable` - database failure
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    State(keys): State<Arc<TokenKeys>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.username);

    let Some(user) = get_user_by_username(&pool, &request.username).await? else {
        tracing::warn!("User not found: {}", request.username);
        hasher.dummy_verify_async(request.password).await?;
        return Err(BackendError::AuthenticationFailed);
    };

    let valid = hasher
        .verify_async(request.password, user.password_hash.clone())
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(BackendError::AuthenticationFailed);
    }

    let token = keys.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok(Json(TokenResponse { token }))
}
