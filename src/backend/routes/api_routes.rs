/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Behind the auth gate
 * - `GET /api/auth/me` - Current user info
 * - `GET /api/protected` - Identity echo
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, protected, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Gated routes get `auth_middleware` through `route_layer`, so it only runs
/// for requests that matched one of them.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/protected", get(protected))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .merge(gated)
}
