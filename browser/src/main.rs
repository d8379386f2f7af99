//! LinkedIn Profile Browser
//!
//! Serves a single page that forwards a search to the scraping service and
//! pages through the returned profiles, with an Excel export.

mod browser;
mod config;
mod error;
mod export;
mod routes;
mod state;
mod view;

use std::sync::Arc;

use anyhow::Context;
use scrape_client::ScrapeClient;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .init();

    tracing::info!("Starting Profile Browser...");

    let client = ScrapeClient::new(&settings.scrape_api_url)
        .context("invalid scrape_api_url")?;
    tracing::info!(endpoint = %client.endpoint(), "Scraping service configured");

    let state = Arc::new(AppState::new(Arc::new(client)));
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.listen_addr))?;
    tracing::info!("Server running at http://{}", settings.listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
