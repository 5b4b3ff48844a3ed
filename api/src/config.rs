//! API configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP API server.
///
/// # Example
///
/// ```rust
/// use govanity_api::ApiConfig;
///
/// let config = ApiConfig {
///     port: 9090,
///     request_timeout_secs: 10,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Port to bind the HTTP server to.
    ///
    /// Default: 9090
    pub port: u16,

    /// Request timeout in seconds.
    ///
    /// Requests exceeding this duration are answered with 408.
    ///
    /// Default: 10
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 9090,
            request_timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Default configuration listening on `port`.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }
}
