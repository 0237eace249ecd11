use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// A full article row plus its derived comment count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub comment_count: i64,
}

/// Listing shape: everything but the body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub comment_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: NaiveDateTime,
}
