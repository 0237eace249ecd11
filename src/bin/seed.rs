//! Seeds the configured database: `seed <data.json>`.

use anyhow::{bail, Context};
use news_api::{
    init_db, init_tracing,
    seed::{seed, SeedData},
    AppConfig,
};

async fn run() -> news_api::Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: seed <data.json>");
    };
    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {path}"))?;
    let data = SeedData::from_json(&json).with_context(|| format!("Invalid seed data in {path}"))?;

    let config = AppConfig::from_env()?;
    let pool = init_db(&config.database_url).await?;
    seed(&pool, &data).await.context("Failed to seed database")?;
    tracing::info!(
        %path,
        articles = data.articles.len(),
        comments = data.comments.len(),
        "database seeded"
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();
    if let Err(error) = run().await {
        tracing::error!("{:#}", error);
        std::process::exit(1);
    }
}
