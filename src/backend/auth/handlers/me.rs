/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the account behind the presented token. The route
 * sits behind the auth gate, so by the time this runs the token has been
 * verified and the principal id is in the request extensions.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `404 NotFound` - the token is valid but no such user exists
/// * `500 StoreUnavailable` - database failure
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let user = get_user_by_id(&pool, user.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", user.user_id);
        BackendError::NotFound
    })?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        created_at: user.created_at,
    }))
}
