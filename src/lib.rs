mod config;
mod data_formats;
mod db_helpers;
mod errors;
mod extract;
mod handlers;
mod models;
pub mod seed;
mod validation;

#[cfg(test)]
mod test_support;

use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use config::AppConfig;
pub use data_formats::*;
pub use db_helpers::{ArticleRepo, CommentRepo, TopicRepo, UserRepo};
pub use errors::{RequestError, RequestErrorJson};
use handlers::*;
pub use models::*;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub type JsonResponse<T> = (StatusCode, Json<T>);

const DEFAULT_LOG_FILTER: &str = "news_api=info,tower_http=info";

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run_app(app: Router, address: SocketAddr, pool: SqlitePool) -> Result<()> {
    let listener =
        TcpListener::bind(address).with_context(|| format!("Failed to bind {address}"))?;
    serve(app, listener, pool).await
}

/// Serves `app` on an already bound listener, handing every request the pool.
pub async fn serve(app: Router, listener: TcpListener, pool: SqlitePool) -> Result<()> {
    let address = listener.local_addr()?;
    let app = app
        .layer(Extension(Arc::new(pool)))
        .layer(TraceLayer::new_for_http());
    tracing::info!(%address, "server listening");
    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!(db_url, "creating database");
        Sqlite::create_database(db_url)
            .await
            .with_context(|| format!("Failed to create database {db_url}"))?;
    } else {
        tracing::debug!(db_url, "database already exists");
    }
    let pool = SqlitePool::connect(db_url)
        .await
        .with_context(|| format!("Failed to connect to {db_url}"))?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::debug!("migrations completed");
    Ok(pool)
}

pub fn make_router() -> Router {
    Router::new()
        .route("/check_health", get(alive))
        .route("/api", get(get_endpoints))
        .route("/api/topics", get(get_topics))
        .route("/api/articles", get(list_articles).post(post_article))
        .route(
            "/api/articles/:article_id",
            get(get_article).patch(patch_article).delete(delete_article),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_article_comments).post(post_comment),
        )
        .route(
            "/api/comments/:comment_id",
            patch(patch_comment).delete(delete_comment),
        )
        .route("/api/users", get(get_users))
        .route("/api/users/:username", get(get_user))
        .fallback(not_found)
}
