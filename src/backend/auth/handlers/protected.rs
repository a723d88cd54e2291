/**
 * Protected Route Handler
 *
 * GET /api/protected answers only for requests the auth gate admitted. It
 * needs no store access: the principal id comes from the verified token.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::ProtectedResponse;
use crate::backend::middleware::auth::AuthUser;

/// Protected route handler
pub async fn protected(AuthUser(user): AuthUser) -> Json<ProtectedResponse> {
    tracing::debug!("Protected route accessed by {}", user.user_id);

    Json(ProtectedResponse {
        message: "Access granted".to_string(),
        user_id: user.user_id.to_string(),
    })
}
