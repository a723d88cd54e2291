/**
 * Content Route Handlers
 *
 * GET /api/{collection} returns every document of a served collection as a
 * JSON array. The path segment is parsed into `Collection` before the store
 * is touched, so unknown names stop at the boundary with a 404.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::content::db::{fetch_collection, CollectionDocuments};
use crate::backend::error::BackendError;
use crate::shared::Collection;

/// Collection read handler
///
/// # Errors
///
/// * `404 CollectionNotFound` - name outside the served set
/// * `500 StoreUnavailable` - database failure
pub async fn get_collection(
    State(pool): State<SqlitePool>,
    Path(name): Path<String>,
) -> Result<Json<CollectionDocuments>, BackendError> {
    let collection = name.parse::<Collection>().map_err(|e| {
        tracing::warn!("{}", e);
        BackendError::from(e)
    })?;

    let documents = fetch_collection(&pool, collection).await.map_err(|e| {
        tracing::error!("Error fetching data from {} collection: {:?}", collection, e);
        BackendError::from(e)
    })?;

    tracing::info!(
        "Data fetched successfully from {} collection: {} documents",
        collection,
        documents.len()
    );

    Ok(Json(documents))
}
