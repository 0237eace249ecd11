use sqlx::{Sqlite, SqlitePool};

use crate::{errors::RequestError, models::User};

use super::row_exists;

pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Full rows; trimming to usernames is left to the response layer.
    pub async fn list(&self) -> Result<Vec<User>, RequestError> {
        let users = sqlx::query_as::<Sqlite, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, RequestError> {
        let user = sqlx::query_as::<Sqlite, User>(
            r#"
            SELECT username, name, avatar_url FROM users WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        match user {
            Some(user) => Ok(user),
            None => Err(RequestError::NotFound("Username not found")),
        }
    }

    pub async fn exists(&self, username: &str) -> Result<bool, RequestError> {
        let found = row_exists(
            self.pool,
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)",
            username,
        )
        .await?;
        Ok(found)
    }
}
