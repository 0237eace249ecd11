use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Extension, Json,
};
use sqlx::SqlitePool;

use crate::{
    data_formats::*,
    db_helpers::{ArticleRepo, CommentRepo, TopicRepo, UserRepo},
    errors::{RequestError, RequestErrorJson},
    extract::JsonBody,
    JsonResponse,
};

type JsonResult<T> = Result<Json<T>, RequestError>;
type CreatedResult<T> = Result<JsonResponse<T>, RequestError>;

const ENDPOINTS: &str = include_str!("../endpoints.json");

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found(uri: Uri) -> JsonResponse<RequestErrorJson> {
    tracing::debug!(%uri, "no route matched");
    (
        StatusCode::NOT_FOUND,
        Json(RequestErrorJson::new("Path not found")),
    )
}

pub async fn get_endpoints() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], ENDPOINTS)
}

// ----------------- Topic Handlers -----------------
pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<TopicsWrapper> {
    let topics = TopicRepo::new(&pool).list().await?;
    Ok(Json(TopicsWrapper {
        topics: topics.into_iter().map(TopicResponse::new).collect(),
    }))
}

// ----------------- Article Handlers -----------------
pub async fn list_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(params): Query<ArticleQueryParams>,
) -> JsonResult<MultipleArticlesWrapper> {
    let articles = ArticleRepo::new(&pool).list(params).await?;
    Ok(Json(MultipleArticlesWrapper {
        articles: articles
            .into_iter()
            .map(ArticleSummaryResponse::new)
            .collect(),
    }))
}

pub async fn get_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<ArticleWrapper<ArticleResponse>> {
    let article = ArticleRepo::new(&pool).get_by_id(&article_id).await?;
    Ok(Json(ArticleWrapper {
        article: ArticleResponse::new(article),
    }))
}

pub async fn patch_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    JsonBody(VoteRequest { inc_votes }): JsonBody<VoteRequest>,
) -> JsonResult<ArticleWrapper<ArticleResponse>> {
    let article = ArticleRepo::new(&pool)
        .update_votes(&article_id, inc_votes.as_ref())
        .await?;
    Ok(Json(ArticleWrapper {
        article: ArticleResponse::new(article),
    }))
}

pub async fn post_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    JsonBody(request): JsonBody<CreateArticleRequest>,
) -> CreatedResult<ArticleWrapper<ArticleResponse>> {
    let article = ArticleRepo::new(&pool).insert(request).await?;
    tracing::info!(article_id = article.article_id, "article created");
    Ok((
        StatusCode::CREATED,
        Json(ArticleWrapper {
            article: ArticleResponse::new(article),
        }),
    ))
}

pub async fn delete_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    ArticleRepo::new(&pool).delete(&article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- Comment Handlers -----------------
pub async fn get_article_comments(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<MultipleCommentsWrapper> {
    ArticleRepo::new(&pool).ensure_exists(&article_id).await?;
    let comments = CommentRepo::new(&pool).list_for_article(&article_id).await?;
    Ok(Json(MultipleCommentsWrapper {
        comments: comments.into_iter().map(CommentResponse::new).collect(),
    }))
}

pub async fn post_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    JsonBody(request): JsonBody<CommentRequest>,
) -> CreatedResult<CommentWrapper<CommentResponse>> {
    let comment = CommentRepo::new(&pool).insert(&article_id, request).await?;
    tracing::info!(comment_id = comment.comment_id, "comment created");
    Ok((
        StatusCode::CREATED,
        Json(CommentWrapper {
            comment: CommentResponse::new(comment),
        }),
    ))
}

pub async fn patch_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
    JsonBody(VoteRequest { inc_votes }): JsonBody<VoteRequest>,
) -> JsonResult<CommentWrapper<CommentResponse>> {
    let comment = CommentRepo::new(&pool)
        .update_votes(&comment_id, inc_votes.as_ref())
        .await?;
    Ok(Json(CommentWrapper {
        comment: CommentResponse::new(comment),
    }))
}

pub async fn delete_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    CommentRepo::new(&pool).remove(&comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------
pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<UsersWrapper> {
    let users = UserRepo::new(&pool).list().await?;
    Ok(Json(UsersWrapper {
        users: users.into_iter().map(UsernameResponse::new).collect(),
    }))
}

pub async fn get_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(username): Path<String>,
) -> JsonResult<UserWrapper<UserResponse>> {
    let user = UserRepo::new(&pool).get_by_username(&username).await?;
    Ok(Json(UserWrapper {
        user: UserResponse::new(user),
    }))
}
