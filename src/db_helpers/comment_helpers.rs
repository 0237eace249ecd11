use serde_json::Value;
use sqlx::{Sqlite, SqlitePool};

use crate::{
    data_formats::CommentRequest,
    errors::RequestError,
    models::Comment,
    validation::{parse_id, parse_inc_votes, required, INVALID_INC_VOTES},
};

use super::{ArticleRepo, UserRepo};

const INVALID_COMMENT_ID: &str = "Invalid comment ID";
const COMMENT_NOT_FOUND: &str = "Comment ID not found";

pub struct CommentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Newest first. Does not check that the article exists; callers that
    /// need a 404 for unknown articles ask `ArticleRepo::ensure_exists`.
    pub async fn list_for_article(&self, article_id: &str) -> Result<Vec<Comment>, RequestError> {
        let article_id = parse_id(article_id, "Invalid article ID")?;
        let comments = sqlx::query_as::<Sqlite, Comment>(
            r#"
            SELECT comment_id, article_id, author, body, votes, created_at
            FROM   comments
            WHERE  article_id = $1
            ORDER  BY created_at DESC, comment_id DESC
            "#,
        )
        .bind(article_id)
        .fetch_all(self.pool)
        .await?;
        Ok(comments)
    }

    pub async fn insert(
        &self,
        article_id: &str,
        CommentRequest { username, body }: CommentRequest,
    ) -> Result<Comment, RequestError> {
        let article_id = parse_id(article_id, "Invalid article ID")?;
        let author = required(username)?;
        let body = required(body)?;

        let result = sqlx::query_as::<Sqlite, Comment>(
            r#"
            INSERT INTO comments (article_id, author, body)
            VALUES ($1, $2, $3)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(article_id)
        .bind(&author)
        .bind(&body)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(comment) => Ok(comment),
            Err(e) => {
                let error = RequestError::from(e);
                if !error.is_foreign_key_violation() {
                    return Err(error);
                }
                if !ArticleRepo::new(self.pool).exists_by_id(article_id).await? {
                    return Err(RequestError::NotFound("Article ID not found"));
                }
                if !UserRepo::new(self.pool).exists(&author).await? {
                    return Err(RequestError::NotFound("Username not found"));
                }
                Err(error)
            }
        }
    }

    pub async fn remove(&self, comment_id: &str) -> Result<(), RequestError> {
        let comment_id = parse_id(comment_id, INVALID_COMMENT_ID)?;
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RequestError::NotFound(COMMENT_NOT_FOUND));
        }
        Ok(())
    }

    pub async fn update_votes(
        &self,
        comment_id: &str,
        inc_votes: Option<&Value>,
    ) -> Result<Comment, RequestError> {
        let comment_id = parse_id(comment_id, INVALID_COMMENT_ID)?;
        let inc_votes = parse_inc_votes(inc_votes)?;

        let comment = sqlx::query_as::<Sqlite, Comment>(
            r#"
            UPDATE comments
            SET    votes = votes + $1
            WHERE  comment_id = $2
              AND  votes BETWEEN (-9223372036854775807 - 1) - MIN($1, 0)
                             AND 9223372036854775807 - MAX($1, 0)
            RETURNING comment_id, article_id, author, body, votes, created_at
            "#,
        )
        .bind(inc_votes)
        .bind(comment_id)
        .fetch_optional(self.pool)
        .await?;

        match comment {
            Some(comment) => Ok(comment),
            None if self.exists_by_id(comment_id).await? => {
                Err(RequestError::InvalidInput(INVALID_INC_VOTES))
            }
            None => Err(RequestError::NotFound(COMMENT_NOT_FOUND)),
        }
    }

    async fn exists_by_id(&self, comment_id: i64) -> Result<bool, RequestError> {
        let found = sqlx::query_scalar::<Sqlite, bool>(
            "SELECT EXISTS (SELECT 1 FROM comments WHERE comment_id = $1)",
        )
        .bind(comment_id)
        .fetch_one(self.pool)
        .await?;
        Ok(found)
    }
}
