// ABOUTME: Main entry point for the job-scrape API server.
// ABOUTME: Initializes logging, loads config, and serves the axum router.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use joblens_extract::Client;
use joblens_server::{build_app, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,joblens_server=debug,joblens_extract=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let mut builder = Client::builder().timeout(config.scrape_timeout);
    if let Some(ref user_agent) = config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    let app = build_app(builder.build());

    let addr = config.bind_addr();
    tracing::info!("Starting job-scrape API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
