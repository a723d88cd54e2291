/**
 * Authentication Middleware
 *
 * The auth gate for protected routes. Each request is judged on its own:
 * either it carries a token that verifies, and the principal id is attached
 * to the request extensions, or it is rejected with the reason.
 *
 * The `Authorization` header may hold `Bearer <token>` (scheme matched
 * case-insensitively) or the bare token.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Rejects with `MissingCredential`, `InvalidToken` or `ExpiredToken`.
pub async fn auth_middleware(
    State(keys): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_token(request.headers())?;

    let user_id = keys.verify_subject(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::from(e)
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Pull the token out of the Authorization header
pub fn extract_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let value = headers.get(AUTHORIZATION).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::MissingCredential
    })?;

    let value = value.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid ASCII");
        BackendError::InvalidToken
    })?;

    let value = value.trim();
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    if token.is_empty() {
        tracing::warn!("Empty Authorization header");
        return Err(BackendError::MissingCredential);
    }

    Ok(token)
}

/// Axum extractor for authenticated user
///
/// Use as a handler parameter on routes behind `auth_middleware`.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::MissingCredential
            })?;

        Ok(AuthUser(user))
    }
}
