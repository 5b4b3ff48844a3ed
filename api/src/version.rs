//! Build and version identification.

use serde::Serialize;

/// Crate version the server was built from.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build identifier, taken from `GOVANITY_BUILD_CODE` at compile time.
pub const BUILD_CODE: &str = match option_env!("GOVANITY_BUILD_CODE") {
    Some(code) => code,
    None => "dev",
};

/// Payload of `GET /api/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// Server name
    pub name: &'static str,
    /// Release version
    pub version: &'static str,
    /// Build identifier
    pub build_code: &'static str,
}

impl VersionInfo {
    /// Version information for this binary.
    pub fn current() -> Self {
        Self {
            name: "govanity",
            version: VERSION,
            build_code: BUILD_CODE,
        }
    }
}
