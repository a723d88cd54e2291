/**
 * Database Operations for Course Content
 *
 * Documents are stored as JSON bodies in one `documents` table keyed by
 * collection name. Every read and write goes through a `Document` type, so
 * the shape of each collection is fixed at compile time.
 */

use chrono::Utc;
use serde::Serialize;
use sqlx::{types::Json, SqlitePool};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::content::{
    AgeOfAiEntry, ArticleEntry, Collection, CourseEntry, Document, MediaArticleEntry,
    StoredDocument,
};

/// Content store errors
#[derive(Debug, Error)]
pub enum ContentStoreError {
    /// The document type does not belong in the target collection
    #[error("document type does not belong to collection {0}")]
    WrongCollection(Collection),

    /// Any database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// All documents of one collection, typed by the collection's shape
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CollectionDocuments {
    AgeOfAi(Vec<StoredDocument<AgeOfAiEntry>>),
    Course(Vec<StoredDocument<CourseEntry>>),
    Article(Vec<StoredDocument<ArticleEntry>>),
    MediaArticle(Vec<StoredDocument<MediaArticleEntry>>),
}

impl CollectionDocuments {
    pub fn len(&self) -> usize {
        match self {
            Self::AgeOfAi(docs) => docs.len(),
            Self::Course(docs) => docs.len(),
            Self::Article(docs) => docs.len(),
            Self::MediaArticle(docs) => docs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Save a document into a collection
///
/// # Returns
/// The id assigned to the new document
pub async fn insert_document<D: Document>(
    pool: &SqlitePool,
    collection: Collection,
    document: &D,
) -> Result<Uuid, ContentStoreError> {
    if !D::belongs_to(collection) {
        return Err(ContentStoreError::WrongCollection(collection));
    }

    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO documents (id, collection, body, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(collection.as_str())
    .bind(Json(document))
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(id)
}

/// Number of documents stored in a collection
pub async fn count_documents(
    pool: &SqlitePool,
    collection: Collection,
) -> Result<i64, ContentStoreError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents WHERE collection = ?")
        .bind(collection.as_str())
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Load every document of a collection, oldest first
pub async fn fetch_documents<D: Document>(
    pool: &SqlitePool,
    collection: Collection,
) -> Result<Vec<StoredDocument<D>>, ContentStoreError> {
    if !D::belongs_to(collection) {
        return Err(ContentStoreError::WrongCollection(collection));
    }

    let rows = sqlx::query_as::<_, (Uuid, Json<D>)>(
        r#"
        SELECT id, body
        FROM documents
        WHERE collection = ?
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(collection.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, Json(body))| StoredDocument { id, body })
        .collect())
}

/// Load a collection with the document type that belongs to it
pub async fn fetch_collection(
    pool: &SqlitePool,
    collection: Collection,
) -> Result<CollectionDocuments, ContentStoreError> {
    let documents = match collection {
        Collection::AgeOfAi => {
            CollectionDocuments::AgeOfAi(fetch_documents(pool, collection).await?)
        }
        Collection::DevTools => {
            CollectionDocuments::Course(fetch_documents(pool, collection).await?)
        }
        Collection::WebDev | Collection::Road => {
            CollectionDocuments::Article(fetch_documents(pool, collection).await?)
        }
        Collection::Tools | Collection::Working => {
            CollectionDocuments::MediaArticle(fetch_documents(pool, collection).await?)
        }
    };

    Ok(documents)
}
