use news_api::{init_db, init_tracing, make_router, run_app, AppConfig};

async fn start() -> news_api::Result<()> {
    let config = AppConfig::from_env()?;
    let pool = init_db(&config.database_url).await?;
    run_app(make_router(), config.address, pool).await
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();
    match start().await {
        Ok(_) => (),
        Err(error) => {
            tracing::error!("{:#}", error);
            std::process::exit(1);
        }
    }
}
