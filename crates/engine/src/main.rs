//! Pokedex - Main entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_engine::api::Cli;
use pokedex_engine::infrastructure::{clock::SystemClock, config::AppConfig, pokeapi::PokeApiClient};
use pokedex_engine::App;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (for POKEDEX_API_URL and friends)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never mix with console results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;
    tracing::debug!(
        api_base_url = %config.api_base_url,
        timeout_secs = config.request_timeout.as_secs(),
        "Loaded configuration"
    );

    let catalog = Arc::new(PokeApiClient::new(&config.api_base_url, config.request_timeout)?);
    let app = App::new(catalog, Arc::new(SystemClock::new()), &config);

    let context = app.execute(cli.into_request()).await?;
    tracing::info!(results = context.result.len(), "Request complete");

    Ok(())
}
