//! Configuration document: host, cache policy and path mappings.
//!
//! Supports:
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//! - TOML (`.toml`)
//!
//! Decoding never validates; call [`Configuration::validate`] (or build a
//! [`RoutingTable`](crate::RoutingTable), which validates) before use.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::errors::{StateError, StateResult};
use crate::repository::normalize_path;
use crate::vcs::Vcs;

/// Default `Cache-Control` max-age, in seconds (one day).
pub const DEFAULT_CACHE_MAX_AGE: u64 = 86400;

fn default_cache_max_age() -> u64 {
    DEFAULT_CACHE_MAX_AGE
}

/// Source specification for one vanity path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Repository location handed to the `go` tool
    pub repo: String,

    /// Version-control kind (defaults to git)
    #[serde(default)]
    pub vcs: Vcs,

    /// Optional `go-source` template; derived from `repo` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl PathSpec {
    /// Git repository spec with no explicit display template.
    pub fn git(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            vcs: Vcs::Git,
            display: None,
        }
    }
}

/// The externally supplied server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Public host name used to build import paths
    #[serde(default)]
    pub host: String,

    /// Lifetime announced in the `Cache-Control` header
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age: u64,

    /// Path key to repository source; keys need not start with `/`
    #[serde(default)]
    pub paths: BTreeMap<String, PathSpec>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: String::new(),
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
            paths: BTreeMap::new(),
        }
    }
}

impl Configuration {
    /// Create a configuration for `host` with no paths yet.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper to add a path entry.
    pub fn with_path(mut self, path: impl Into<String>, spec: PathSpec) -> Self {
        self.paths.insert(path.into(), spec);
        self
    }

    /// Check every invariant a configuration must hold before it may be served.
    ///
    /// # Errors
    ///
    /// Returns `StateError::InvalidConfiguration` when:
    /// - no paths are configured
    /// - the host is empty, contains whitespace, a scheme, or edge slashes
    /// - an entry has an empty or whitespace-containing repository
    /// - two keys normalize to the same path
    pub fn validate(&self) -> StateResult<()> {
        if self.paths.is_empty() {
            return Err(StateError::invalid("At least one path configuration is required"));
        }

        let host = self.host.as_str();
        if host.is_empty() {
            return Err(StateError::invalid("host cannot be empty"));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(StateError::invalid(format!("host {:?} contains whitespace", host)));
        }
        if host.contains("://") {
            return Err(StateError::invalid(format!(
                "host {:?} must not include a URL scheme",
                host
            )));
        }
        if host.starts_with('/') || host.ends_with('/') {
            return Err(StateError::invalid(format!(
                "host {:?} must not start or end with '/'",
                host
            )));
        }

        let mut seen = HashSet::with_capacity(self.paths.len());
        for (key, spec) in &self.paths {
            if spec.repo.trim().is_empty() {
                return Err(StateError::invalid(format!("path {:?}: repo cannot be empty", key)));
            }
            if spec.repo.chars().any(char::is_whitespace) {
                return Err(StateError::invalid(format!(
                    "path {:?}: repo {:?} contains whitespace",
                    key, spec.repo
                )));
            }
            let normalized = normalize_path(key);
            if !seen.insert(normalized.clone()) {
                return Err(StateError::invalid(format!(
                    "path {:?} duplicates {:?} after normalization",
                    key, normalized
                )));
            }
        }

        Ok(())
    }

    /// Load a configuration file, picking the decoder from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> StateResult<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(|source| StateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            format = format.name(),
            "Decoding configuration file"
        );
        format.decode(&contents)
    }

    /// Decode a JSON document (e.g. an administrative POST body).
    pub fn from_json_slice(bytes: &[u8]) -> StateResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| StateError::Decode {
            format: "json",
            message: e.to_string(),
        })
    }
}

/// Serialization formats accepted for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> StateResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(StateError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    fn decode(self, contents: &str) -> StateResult<Configuration> {
        let decode_err = |message: String| StateError::Decode {
            format: self.name(),
            message,
        };
        match self {
            Self::Yaml => serde_yaml::from_str(contents).map_err(|e| decode_err(e.to_string())),
            Self::Json => serde_json::from_str(contents).map_err(|e| decode_err(e.to_string())),
            Self::Toml => toml::from_str(contents).map_err(|e| decode_err(e.to_string())),
        }
    }
}
