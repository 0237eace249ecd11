use serde::{Deserialize, Serialize};

use super::response::{
    ArticleSummaryResponse, CommentResponse, TopicResponse, UsernameResponse,
};

#[derive(Debug, Deserialize, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<TopicResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserWrapper<T> {
    pub user: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<UsernameResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleArticlesWrapper {
    pub articles: Vec<ArticleSummaryResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentWrapper<T> {
    pub comment: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleCommentsWrapper {
    pub comments: Vec<CommentResponse>,
}
