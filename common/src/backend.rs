//! Unified state trait consumed by the HTTP transport.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   API (HTTP)     │
//! └────────┬─────────┘
//!          │  Arc<dyn VanityStateProvider>
//!          ▼
//! ┌──────────────────────────┐
//! │  VanityStateProvider     │  <- SINGLE TRAIT
//! │  lookup / list_all / ... │
//! └────────┬─────────────────┘
//!          ▼
//! ┌──────────────────────────┐
//! │  StateManager (appstate) │
//! └──────────────────────────┘
//! ```
//!
//! The transport never touches configuration storage directly; every read
//! and every replacement goes through this trait.

use std::sync::Arc;

use crate::config::Configuration;
use crate::errors::StateResult;
use crate::repository::RepositoryDescriptor;
use crate::routing::RoutingTable;

/// Read/replace access to the active (configuration, routing table) pair.
///
/// All methods are synchronous and return snapshots: nothing returned here
/// changes underneath the caller when a replacement happens concurrently.
pub trait VanityStateProvider: Send + Sync + 'static {
    /// Repository registered for `path` (normalized first).
    ///
    /// # Errors
    ///
    /// `StateError::NotFound` when no repository matches.
    fn lookup(&self, path: &str) -> StateResult<RepositoryDescriptor>;

    /// Consistent snapshot of the host and every repository.
    fn list_all(&self) -> Arc<RoutingTable>;

    /// Copy of the active configuration.
    fn current_configuration(&self) -> Configuration;

    /// Cache lifetime of the active configuration, in seconds.
    fn cache_max_age(&self) -> u64;

    /// Validate `config` and atomically make it active.
    ///
    /// Returns the number of paths now served.
    ///
    /// # Errors
    ///
    /// `StateError::InvalidConfiguration` when validation fails; the
    /// previous state stays active.
    fn replace(&self, config: Configuration) -> StateResult<usize>;

    /// Re-read the configuration from the source it was loaded from and
    /// make it active.
    ///
    /// # Errors
    ///
    /// `StateError::NoSource` when no source is retained, or any load or
    /// validation error; the previous state stays active.
    fn reload(&self) -> StateResult<usize>;
}

/// Blanket implementation for `Arc<dyn VanityStateProvider>`.
impl VanityStateProvider for Arc<dyn VanityStateProvider> {
    fn lookup(&self, path: &str) -> StateResult<RepositoryDescriptor> {
        (**self).lookup(path)
    }

    fn list_all(&self) -> Arc<RoutingTable> {
        (**self).list_all()
    }

    fn current_configuration(&self) -> Configuration {
        (**self).current_configuration()
    }

    fn cache_max_age(&self) -> u64 {
        (**self).cache_max_age()
    }

    fn replace(&self, config: Configuration) -> StateResult<usize> {
        (**self).replace(config)
    }

    fn reload(&self) -> StateResult<usize> {
        (**self).reload()
    }
}
