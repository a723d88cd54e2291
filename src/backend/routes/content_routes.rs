/**
 * Content Route Handlers
 *
 * - `GET /api/{collection}` - All documents of a served collection
 *
 * Static segments such as `/api/protected` take precedence over the
 * `{collection}` capture, so the collection route never shadows them.
 */

use axum::{routing::get, Router};

use crate::backend::content::get_collection;
use crate::backend::server::state::AppState;

/// Configure content routes
pub fn configure_content_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/api/{collection}", get(get_collection))
}
