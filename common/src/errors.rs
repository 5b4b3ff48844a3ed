//! Error types for configuration and routing state.
//!
//! Every failure the state layer can produce is a variant here; transports
//! map them to their own status codes and never see raw I/O or decode errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors raised while loading, validating, or querying vanity state.
#[derive(Debug, Error)]
pub enum StateError {
    /// The configuration was rejected before it could become active.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// No repository is registered under the requested path.
    #[error("unknown path")]
    NotFound(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The configuration document could not be decoded.
    #[error("failed to decode {format} configuration: {message}")]
    Decode {
        /// Serialization format ("yaml", "json" or "toml")
        format: &'static str,
        /// Decoder message
        message: String,
    },

    /// The configuration file extension is not a supported format.
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Reload was requested but the state was not loaded from a file.
    #[error("no configuration source available to reload from")]
    NoSource,
}

impl StateError {
    /// Shorthand for an `InvalidConfiguration` error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    /// Whether this error rejects the configuration contents (as opposed to
    /// failing to obtain them).
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}
