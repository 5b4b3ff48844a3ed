//! Go vanity server binary support.
//!
//! The binary parses [`CliArgs`], builds an `appstate::StateManager` from the
//! configuration file and hands it to `govanity-api`. Request handling lives
//! in the API crate; state lives in `appstate`.

pub mod config;
pub mod error;

pub use config::CliArgs;
pub use error::{ServerError, ServerResult};

use appstate::{ConfigSource, StateManager};

/// Load and validate the configuration named by `args`.
///
/// The source is retained so `/api/config/reload` can read it again.
pub fn bootstrap(args: &CliArgs) -> ServerResult<StateManager> {
    let path = args.config.as_ref().ok_or(ServerError::ConfigRequired)?;
    tracing::info!(path = %path.display(), "Loading configuration");

    Ok(StateManager::from_source(ConfigSource::file(path))?)
}
