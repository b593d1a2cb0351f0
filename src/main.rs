use anyhow::Result;
use std::sync::Arc;
use studypro::application::usecases::seed::SeedUseCase;
use studypro::config::config_loader;
use studypro::infrastructure::axum_http::http_serve;
use studypro::infrastructure::jsonfile::{
    repositories::{content::ContentJsonFile, users::UserJsonFile},
    store::JsonFileStore,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Server exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let store = Arc::new(JsonFileStore::open(&dotenvy_env.storage.data_file)?);
    info!("Data file has been opened");

    let seed_usecase = SeedUseCase::new(
        Arc::new(UserJsonFile::new(Arc::clone(&store))),
        Arc::new(ContentJsonFile::new(Arc::clone(&store))),
    );
    seed_usecase.run(&dotenvy_env.admin_seed).await?;
    info!("Seed data has been ensured");

    http_serve::start(Arc::new(dotenvy_env), store).await?;

    Ok(())
}
