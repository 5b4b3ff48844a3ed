//! Read-optimized routing table derived from a [`Configuration`].
//!
//! A table is built in one step from a validated configuration and is never
//! mutated afterwards. Replacing the active configuration means building a
//! new table, so readers holding the old one keep a complete view.

use serde::Serialize;
use std::collections::HashMap;

use crate::config::Configuration;
use crate::errors::{StateError, StateResult};
use crate::repository::{normalize_path, RepositoryDescriptor};

/// All repositories served for one configuration, ordered by path key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingTable {
    host: String,
    repositories: Vec<RepositoryDescriptor>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl RoutingTable {
    /// Validate `config` and derive its routing table.
    ///
    /// # Errors
    ///
    /// Returns `StateError::InvalidConfiguration` if the configuration fails
    /// [`Configuration::validate`].
    pub fn build(config: &Configuration) -> StateResult<Self> {
        config.validate()?;

        let repositories: Vec<RepositoryDescriptor> = config
            .paths
            .iter()
            .map(|(path, spec)| RepositoryDescriptor::new(&config.host, path, spec))
            .collect();

        let index = repositories
            .iter()
            .enumerate()
            .map(|(i, repo)| (repo.path().to_string(), i))
            .collect();

        Ok(Self {
            host: config.host.clone(),
            repositories,
            index,
        })
    }

    /// Public host the import paths were built from.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Every repository, in configuration key order.
    pub fn repositories(&self) -> &[RepositoryDescriptor] {
        &self.repositories
    }

    /// Number of repositories.
    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    /// Whether the table has no repositories (never true for a built table).
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    /// Find the repository for a request path, normalizing it first.
    pub fn get(&self, path: &str) -> Option<&RepositoryDescriptor> {
        self.index
            .get(&normalize_path(path))
            .map(|&i| &self.repositories[i])
    }

    /// Like [`get`](Self::get) but reports a miss as `StateError::NotFound`.
    pub fn lookup(&self, path: &str) -> StateResult<&RepositoryDescriptor> {
        self.get(path)
            .ok_or_else(|| StateError::NotFound(normalize_path(path)))
    }
}
