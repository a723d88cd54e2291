//! Content Module
//!
//! Read access to the course collections.
//!
//! - **`db`** - Typed document storage and the per-collection dispatch
//! - **`handlers`** - GET /api/{collection}
//! - **`seed`** - Startup import of documents from a JSON file

pub mod db;
pub mod handlers;
pub mod seed;

pub use db::{
    count_documents, fetch_collection, fetch_documents, insert_document, CollectionDocuments,
    ContentStoreError,
};
pub use handlers::get_collection;
pub use seed::{import_seed, import_seed_file, SeedError};
