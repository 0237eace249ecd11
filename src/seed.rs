//! Loads a JSON data set into a freshly reset store.
//!
//! Comments name their article by 1-based position in `articles`, which is the
//! id each article receives once the autoincrement counters are reset.

use chrono::NaiveDateTime;
use serde::Deserialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub topics: Vec<SeedTopic>,
    pub users: Vec<SeedUser>,
    pub articles: Vec<SeedArticle>,
    pub comments: Vec<SeedComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedTopic {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub votes: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub article_id: i64,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub votes: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl SeedData {
    pub fn from_json(json: &str) -> serde_json::Result<SeedData> {
        serde_json::from_str(json)
    }
}

/// Empties every table and inserts `data` in dependency order.
pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<(), sqlx::Error> {
    for table in ["comments", "articles", "users", "topics"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(pool)
            .await?;
    }
    sqlx::query("DELETE FROM sqlite_sequence")
        .execute(pool)
        .await?;

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(pool)
            .await?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(pool)
            .await?;
    }

    for article in &data.articles {
        sqlx::query(
            r#"
            INSERT INTO articles (title, topic, author, body, created_at, votes)
            VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_TIMESTAMP), COALESCE($6, 0))
            "#,
        )
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .execute(pool)
        .await?;
    }

    for comment in &data.comments {
        sqlx::query(
            r#"
            INSERT INTO comments (article_id, author, body, votes, created_at)
            VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, CURRENT_TIMESTAMP))
            "#,
        )
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(&comment.body)
        .bind(comment.votes)
        .bind(comment.created_at)
        .execute(pool)
        .await?;
    }

    tracing::debug!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "seeded database"
    );
    Ok(())
}
