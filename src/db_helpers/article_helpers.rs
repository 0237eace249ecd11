use serde_json::Value;
use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{ArticleQueryParams, CreateArticleRequest};
use crate::errors::RequestError;
use crate::models::{Article, ArticleSummary};
use crate::validation::{
    parse_id, parse_inc_votes, required, Order, SortBy, INVALID_INC_VOTES,
};

use super::{QueryBuilder, TopicRepo, UserRepo};

const INVALID_ARTICLE_ID: &str = "Invalid article ID";
const ARTICLE_NOT_FOUND: &str = "Article ID not found";

const SINGLE_ARTICLE_QUERY: &str = r#"
            SELECT articles.article_id,
                   articles.author,
                   articles.title,
                   articles.body,
                   articles.topic,
                   articles.created_at,
                   articles.votes,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id
            WHERE  articles.article_id = $1
            GROUP  BY articles.article_id
"#;

// Filter, grouping and ordering are appended at call time.
const ARTICLE_LIST_QUERY: &str = r#"
            SELECT articles.article_id,
                   articles.author,
                   articles.title,
                   articles.topic,
                   articles.created_at,
                   articles.votes,
                   COUNT(comments.comment_id) AS comment_count
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id"#;

pub struct ArticleRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, article_id: &str) -> Result<Article, RequestError> {
        let article_id = parse_id(article_id, INVALID_ARTICLE_ID)?;
        let article = sqlx::query_as::<Sqlite, Article>(SINGLE_ARTICLE_QUERY)
            .bind(article_id)
            .fetch_optional(self.pool)
            .await?;

        match article {
            Some(article) => Ok(article),
            None => Err(RequestError::NotFound(ARTICLE_NOT_FOUND)),
        }
    }

    /// Adds `inc_votes` to the stored count in a single statement.
    pub async fn update_votes(
        &self,
        article_id: &str,
        inc_votes: Option<&Value>,
    ) -> Result<Article, RequestError> {
        let article_id = parse_id(article_id, INVALID_ARTICLE_ID)?;
        let inc_votes = parse_inc_votes(inc_votes)?;

        let article = sqlx::query_as::<Sqlite, Article>(
            r#"
            UPDATE articles
            SET    votes = votes + $1
            WHERE  article_id = $2
              AND  votes BETWEEN (-9223372036854775807 - 1) - MIN($1, 0)
                             AND 9223372036854775807 - MAX($1, 0)
            RETURNING article_id,
                      author,
                      title,
                      body,
                      topic,
                      created_at,
                      votes,
                      (SELECT COUNT(*)
                       FROM   comments
                       WHERE  comments.article_id = articles.article_id) AS comment_count
            "#,
        )
        .bind(inc_votes)
        .bind(article_id)
        .fetch_optional(self.pool)
        .await?;

        match article {
            Some(article) => Ok(article),
            // The row exists but the sum would leave the i64 range.
            None if self.exists_by_id(article_id).await? => {
                Err(RequestError::InvalidInput(INVALID_INC_VOTES))
            }
            None => Err(RequestError::NotFound(ARTICLE_NOT_FOUND)),
        }
    }

    pub async fn list(
        &self,
        ArticleQueryParams {
            sort_by,
            order,
            topic,
        }: ArticleQueryParams,
    ) -> Result<Vec<ArticleSummary>, RequestError> {
        let sort_by = SortBy::parse(sort_by.as_deref())?;
        let order = Order::parse(order.as_deref())?;

        let (filter, params) = QueryBuilder::new(" WHERE ", Some(" AND "))
            .add_param("articles.topic", topic.clone())
            .build();
        //? Only whitelisted column names and keywords are interpolated here
        let query = format!(
            "{} {} GROUP BY articles.article_id ORDER BY {} {}, articles.article_id ASC",
            ARTICLE_LIST_QUERY,
            filter,
            sort_by.column(),
            order.keyword()
        );

        let mut query = sqlx::query_as::<Sqlite, ArticleSummary>(&query);
        for param in params {
            query = query.bind(param);
        }
        let articles = query.fetch_all(self.pool).await?;

        // An empty page is only an error when the topic itself is unknown.
        if articles.is_empty() {
            if let Some(topic) = topic {
                if !TopicRepo::new(self.pool).exists(&topic).await? {
                    return Err(RequestError::NotFound("Topic not found"));
                }
            }
        }
        Ok(articles)
    }

    pub async fn insert(
        &self,
        CreateArticleRequest {
            author,
            title,
            body,
            topic,
        }: CreateArticleRequest,
    ) -> Result<Article, RequestError> {
        let author = required(author)?;
        let title = required(title)?;
        let body = required(body)?;
        let topic = required(topic)?;

        let result = sqlx::query_as::<Sqlite, Article>(
            r#"
            INSERT INTO articles (author, title, body, topic)
            VALUES ($1, $2, $3, $4)
            RETURNING article_id, author, title, body, topic, created_at, votes, 0 AS comment_count
            "#,
        )
        .bind(&author)
        .bind(&title)
        .bind(&body)
        .bind(&topic)
        .fetch_one(self.pool)
        .await;

        match result {
            Ok(article) => Ok(article),
            Err(e) => {
                let error = RequestError::from(e);
                if !error.is_foreign_key_violation() {
                    return Err(error);
                }
                if !UserRepo::new(self.pool).exists(&author).await? {
                    return Err(RequestError::NotFound("Username not found"));
                }
                if !TopicRepo::new(self.pool).exists(&topic).await? {
                    return Err(RequestError::NotFound("Topic not found"));
                }
                Err(error)
            }
        }
    }

    /// Comments go with the article through the schema's cascade.
    pub async fn delete(&self, article_id: &str) -> Result<(), RequestError> {
        let article_id = parse_id(article_id, INVALID_ARTICLE_ID)?;
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(article_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RequestError::NotFound(ARTICLE_NOT_FOUND));
        }
        Ok(())
    }

    /// Fails with NotFound unless the article exists.
    pub async fn ensure_exists(&self, article_id: &str) -> Result<(), RequestError> {
        let article_id = parse_id(article_id, INVALID_ARTICLE_ID)?;
        if self.exists_by_id(article_id).await? {
            Ok(())
        } else {
            Err(RequestError::NotFound(ARTICLE_NOT_FOUND))
        }
    }

    pub(crate) async fn exists_by_id(&self, article_id: i64) -> Result<bool, RequestError> {
        let found = sqlx::query_scalar::<Sqlite, bool>(
            "SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)",
        )
        .bind(article_id)
        .fetch_one(self.pool)
        .await?;
        Ok(found)
    }
}
