use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{Article, ArticleSummary, Comment, Topic, User};

/// Stored timestamps are UTC without an offset.
fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TopicResponse {
    pub slug: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UsernameResponse {
    pub username: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ArticleResponse {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: String,
    pub votes: i64,
    pub comment_count: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ArticleSummaryResponse {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub created_at: String,
    pub votes: i64,
    pub comment_count: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: String,
}

impl TopicResponse {
    pub fn new(Topic { slug, description }: Topic) -> Self {
        TopicResponse { slug, description }
    }
}

impl UserResponse {
    pub fn new(
        User {
            username,
            name,
            avatar_url,
        }: User,
    ) -> Self {
        UserResponse {
            username,
            name,
            avatar_url,
        }
    }
}

impl UsernameResponse {
    pub fn new(User { username, .. }: User) -> Self {
        UsernameResponse { username }
    }
}

impl ArticleResponse {
    pub fn new(
        Article {
            article_id,
            author,
            title,
            body,
            topic,
            created_at,
            votes,
            comment_count,
        }: Article,
    ) -> Self {
        ArticleResponse {
            article_id,
            author,
            title,
            body,
            topic,
            created_at: format_timestamp(created_at),
            votes,
            comment_count,
        }
    }
}

impl ArticleSummaryResponse {
    pub fn new(
        ArticleSummary {
            article_id,
            author,
            title,
            topic,
            created_at,
            votes,
            comment_count,
        }: ArticleSummary,
    ) -> Self {
        ArticleSummaryResponse {
            article_id,
            author,
            title,
            topic,
            created_at: format_timestamp(created_at),
            votes,
            comment_count,
        }
    }
}

impl CommentResponse {
    pub fn new(
        Comment {
            comment_id,
            article_id,
            author,
            body,
            votes,
            created_at,
        }: Comment,
    ) -> Self {
        CommentResponse {
            comment_id,
            article_id,
            author,
            body,
            votes,
            created_at: format_timestamp(created_at),
        }
    }
}
