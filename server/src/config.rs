//! Command-line configuration for the Go vanity server.
//!
//! Supports:
//! - CLI arguments (highest priority)
//! - Environment variables
//! - Defaults (lowest priority)

use clap::Parser;
use govanity_api::ApiConfig;
use std::path::PathBuf;

/// Command-line arguments for the Go vanity server.
#[derive(Parser, Debug, Clone)]
#[command(name = "govanity-server")]
#[command(about = "Serves go-import metadata for custom import paths")]
#[command(version)]
pub struct CliArgs {
    /// Configuration file (YAML, JSON or TOML)
    #[arg(long, short = 'c', env = "GOVANITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// HTTP port
    #[arg(long, short = 'p', default_value = "9090", env = "GOVANITY_PORT")]
    pub port: u16,

    /// Log level, used when `RUST_LOG` is unset
    #[arg(long, default_value = "info", env = "GOVANITY_LOG")]
    pub log_level: String,
}

impl CliArgs {
    /// HTTP settings derived from the arguments.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::with_port(self.port)
    }
}
