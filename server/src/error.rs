//! Error types for server bootstrap.

use common::StateError;
use thiserror::Error;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Fatal startup errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Neither `--config` nor `GOVANITY_CONFIG` was given
    #[error("a configuration file is required (use --config or GOVANITY_CONFIG)")]
    ConfigRequired,

    /// The configuration could not be loaded or was rejected
    #[error("failed to load configuration: {0}")]
    State(#[from] StateError),
}
