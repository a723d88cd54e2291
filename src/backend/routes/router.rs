/**
 * Main Router Creation
 *
 * Assembles the auth routes, the content routes and the static asset
 * services into one `Router`, and adds the cross-cutting layers.
 *
 * # Route Order
 *
 * 1. API routes (auth, protected, collections)
 * 2. Static assets under `/api/images` and `/api/videos`
 * 3. `GET /` welcome text
 * 4. JSON 404 fallback for everything else
 */

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::content_routes::configure_content_routes;
use crate::backend::server::state::AppState;

/// Create the application router
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new();
    let router = configure_api_routes(router, app_state.clone());
    let router = configure_content_routes(router);

    router
        .nest_service("/api/images", ServeDir::new(&app_state.assets_dir))
        .nest_service("/api/videos", ServeDir::new(&app_state.assets_dir))
        .route("/", get(welcome))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn welcome() -> &'static str {
    "Welcome to My API"
}

async fn not_found() -> BackendError {
    BackendError::NotFound
}
