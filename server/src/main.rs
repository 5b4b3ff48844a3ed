//! Go vanity server: answers `go get` metadata requests for custom import paths.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use govanity_api::version::{BUILD_CODE, VERSION};
use govanity_server::{bootstrap, CliArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Go vanity server v{} ({})", VERSION, BUILD_CODE);

    let state = bootstrap(&args).context("startup failed")?;

    govanity_api::run_server(Arc::new(state), args.api_config())
        .await
        .context("HTTP server failed")?;

    Ok(())
}
