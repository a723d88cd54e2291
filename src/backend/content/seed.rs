/**
 * Content Seeding
 *
 * Loads collection documents from a JSON file at startup. The file is one
 * object keyed by collection name:
 *
 * ```json
 * {
 *   "devtools": [{ "title": "Git", "CourseDetails": ["branches"] }],
 *   "webdev": [{ "title": "HTML" }]
 * }
 * ```
 *
 * A collection that already holds documents is left alone, so restarting
 * with the same file does not duplicate anything.
 */

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::content::db::{count_documents, insert_document, ContentStoreError};
use crate::shared::content::{
    AgeOfAiEntry, ArticleEntry, Collection, CourseEntry, Document, MediaArticleEntry,
};
use crate::shared::SharedError;

/// Seed import errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a JSON object of document arrays
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownCollection(#[from] SharedError),

    #[error(transparent)]
    Store(#[from] ContentStoreError),
}

/// Import a seed file
///
/// # Returns
/// The number of documents inserted
pub async fn import_seed_file(pool: &SqlitePool, path: &Path) -> Result<usize, SeedError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!("Importing content seed from {}", path.display());
    import_seed(pool, &raw).await
}

/// Import seed data given as a JSON string
///
/// Every collection name is checked before anything is written.
pub async fn import_seed(pool: &SqlitePool, raw: &str) -> Result<usize, SeedError> {
    let seed: Map<String, Value> = serde_json::from_str(raw)?;

    let mut entries = Vec::with_capacity(seed.len());
    for (name, documents) in seed {
        entries.push((name.parse::<Collection>()?, documents));
    }

    let mut inserted = 0;
    for (collection, documents) in entries {
        inserted += match collection {
            Collection::AgeOfAi => {
                seed_collection::<AgeOfAiEntry>(pool, collection, documents).await?
            }
            Collection::DevTools => {
                seed_collection::<CourseEntry>(pool, collection, documents).await?
            }
            Collection::WebDev | Collection::Road => {
                seed_collection::<ArticleEntry>(pool, collection, documents).await?
            }
            Collection::Tools | Collection::Working => {
                seed_collection::<MediaArticleEntry>(pool, collection, documents).await?
            }
        };
    }

    tracing::info!("Content seed imported: {} documents", inserted);
    Ok(inserted)
}

async fn seed_collection<D: Document>(
    pool: &SqlitePool,
    collection: Collection,
    documents: Value,
) -> Result<usize, SeedError> {
    let documents: Vec<D> = serde_json::from_value(documents)?;

    if count_documents(pool, collection).await? > 0 {
        tracing::info!("Collection {} already has documents, skipping seed", collection);
        return Ok(0);
    }

    for document in &documents {
        insert_document(pool, collection, document).await?;
    }

    tracing::debug!("Seeded {} documents into {}", documents.len(), collection);
    Ok(documents.len())
}
