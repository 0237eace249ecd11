use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::Topic};

use super::row_exists;

pub struct TopicRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Topic>, RequestError> {
        let topics = sqlx::query_as::<Sqlite, Topic>("SELECT slug, description FROM topics")
            .fetch_all(self.pool)
            .await?;
        Ok(topics)
    }

    pub async fn exists(&self, slug: &str) -> Result<bool, RequestError> {
        let found = row_exists(
            self.pool,
            "SELECT EXISTS (SELECT 1 FROM topics WHERE slug = $1)",
            slug,
        )
        .await?;
        Ok(found)
    }
}
