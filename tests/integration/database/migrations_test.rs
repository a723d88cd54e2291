//! Migration tests
//!
//! The migrations must produce the tables and constraints the stores
//! rely on.

use coursehub::backend::auth::users::{create_user, UserStoreError};
use coursehub::backend::server::config::{connect_database, connect_memory_database};

use crate::assert_ok;

#[tokio::test]
async fn test_tables_exist() {
    let pool = connect_memory_database().await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'documents') ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(tables, ["documents", "users"]);
}

#[tokio::test]
async fn test_username_is_unique() {
    let pool = connect_memory_database().await.unwrap();

    assert_ok!(create_user(&pool, "alice", "hash-a").await);
    let second = create_user(&pool, "alice", "hash-b").await;

    assert!(matches!(second, Err(UserStoreError::DuplicateUsername)));
}

#[tokio::test]
async fn test_users_survive_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("users.db").display());

    let pool = assert_ok!(connect_database(&url).await, "first connect");
    let created = create_user(&pool, "alice", "hash").await.unwrap();
    pool.close().await;

    // Running migrations a second time must be a no-op
    let pool = assert_ok!(connect_database(&url).await, "reconnect");
    let found = coursehub::backend::auth::users::get_user_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("user persisted");
    assert_eq!(found.username, "alice");
}
