//! Temporary databases for in-crate tests.

use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::{
    init_db,
    seed::{seed, SeedData},
};

pub const TEST_DATA: &str = include_str!("../data/test_data.json");

pub fn test_data() -> SeedData {
    SeedData::from_json(TEST_DATA).expect("test data is valid JSON")
}

/// A migrated, empty store. Keep the directory alive for the pool's lifetime.
pub async fn empty_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("news.db").display());
    let pool = init_db(&url).await.expect("failed to initialise database");
    (dir, pool)
}

pub async fn seeded_pool() -> (TempDir, SqlitePool) {
    let (dir, pool) = empty_pool().await;
    seed(&pool, &test_data()).await.expect("failed to seed");
    (dir, pool)
}
