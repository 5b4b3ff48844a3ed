//! Go vanity API crate.
//!
//! HTTP layer using Axum that serves `go-import` metadata and the
//! administrative surface from a shared [`VanityStateProvider`].
//!
//! # Architecture
//!
//! This crate provides:
//! - Per-repository `go-import`/`go-source` pages and an index listing
//! - JSON export, replacement and reload of the active configuration
//! - An HTML administration panel
//! - Common response headers (cache policy, nosniff, build identification)
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use appstate::StateManager;
//! use common::{Configuration, PathSpec};
//! use govanity_api::{run_server, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Configuration::new("example.com")
//!         .with_path("pkg", PathSpec::git("https://github.com/x/pkg"));
//!     let state = Arc::new(StateManager::initialize(config)?);
//!     run_server(state, ApiConfig::default()).await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod middleware;
mod render;
mod router;
mod traits;

pub mod routes;
pub mod version;

// Re-export public API
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use middleware::{access_log, response_headers};
pub use render::Renderer;
pub use traits::{ApiState, VanityStateProvider};

use axum::Router;
use std::{net::SocketAddr, sync::Arc};

/// Build the complete router for `provider`.
///
/// Used by [`run_server`] and directly by tests (with `tower::ServiceExt`).
///
/// # Errors
///
/// Returns `ApiError::Render` if a built-in template fails to compile.
pub fn build_router(
    provider: Arc<dyn VanityStateProvider>,
    config: &ApiConfig,
) -> ApiResult<Router> {
    let state = ApiState::new(provider)?;
    Ok(router::configure_routes(state, config))
}

/// Run the HTTP API server until Ctrl-C.
///
/// # Arguments
///
/// * `provider` - Vanity state, shared with any other owner
/// * `config` - API configuration
///
/// # Errors
///
/// Returns an error if:
/// - The port is already in use
/// - The server encounters a fatal error
pub async fn run_server(
    provider: Arc<dyn VanityStateProvider>,
    config: ApiConfig,
) -> anyhow::Result<()> {
    let app = build_router(provider, &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Go vanity server listening on http://{}", addr);

    let service = app.into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
