use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog::application::{CategoryService, SearchInput};
use catalog::config::Config;
use catalog::infrastructure::{load_seed_file, CategoryRepositoryInMemory};

/// Seed an in-memory catalog and print one listing as JSON.
///
/// Usage: `catalog [SEARCH_JSON]`, e.g. `catalog '{"sort":"name","per_page":5}'`.
/// Without an argument the configured `default_listing` is used, then an
/// empty search.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter.as_str().into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let service = CategoryService::new(CategoryRepositoryInMemory::new());

    if let Some(seed_file) = &config.seed_file {
        let entries = load_seed_file(seed_file).await?;
        let summary = service.import(entries).await;
        for (index, error) in &summary.errors {
            tracing::warn!("Seed entry #{} rejected: {}", index, error);
        }
    } else {
        tracing::info!("No seed file configured, starting with an empty catalog");
    }

    let input = match std::env::args().nth(1) {
        Some(raw) => serde_json::from_str::<SearchInput>(&raw)
            .with_context(|| format!("Invalid search input: {}", raw))?,
        None => config.default_listing.clone().unwrap_or_default(),
    };

    let listing = service.list(&input).await?;
    println!("{}", serde_json::to_string_pretty(&listing)?);

    Ok(())
}
