//! Central vanity state.
//!
//! The `StateManager` holds exactly one `Snapshot` (configuration plus the
//! routing table derived from it) behind a read/write lock. Readers clone
//! the `Arc<Snapshot>` and drop the lock immediately. A replacement is
//! validated and derived before the write lock is taken; the lock covers
//! only the pointer swap, so readers see either the old pair or the new one.

use parking_lot::RwLock;
use std::sync::Arc;

use common::{
    Configuration, RepositoryDescriptor, RoutingTable, StateError, StateResult,
    VanityStateProvider,
};

use crate::source::ConfigSource;

/// One immutable (configuration, routing table) pair.
#[derive(Debug)]
pub struct Snapshot {
    configuration: Configuration,
    table: Arc<RoutingTable>,
}

impl Snapshot {
    fn build(configuration: Configuration) -> StateResult<Self> {
        let table = RoutingTable::build(&configuration)?;
        Ok(Self {
            configuration,
            table: Arc::new(table),
        })
    }

    /// Configuration this snapshot was derived from.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Routing table derived from [`configuration`](Self::configuration).
    pub fn table(&self) -> &Arc<RoutingTable> {
        &self.table
    }
}

/// Owner of the active vanity state.
///
/// Construct once at startup and share behind an `Arc`.
#[derive(Debug)]
pub struct StateManager {
    current: RwLock<Arc<Snapshot>>,
    source: Option<ConfigSource>,
}

impl StateManager {
    /// Validate `config` and make it the initial state.
    ///
    /// # Errors
    ///
    /// `StateError::InvalidConfiguration` if the configuration is rejected.
    pub fn initialize(config: Configuration) -> StateResult<Self> {
        let snapshot = Snapshot::build(config)?;
        tracing::info!(
            host = %snapshot.table.host(),
            paths = snapshot.table.len(),
            "Vanity state initialized"
        );
        Ok(Self {
            current: RwLock::new(Arc::new(snapshot)),
            source: None,
        })
    }

    /// Load the initial state from `source` and retain it for reloads.
    ///
    /// # Errors
    ///
    /// Any load error from the source, or `InvalidConfiguration`.
    pub fn from_source(source: ConfigSource) -> StateResult<Self> {
        let config = source.load()?;
        tracing::info!(path = %source.path().display(), "Configuration loaded");
        let mut manager = Self::initialize(config)?;
        manager.source = Some(source);
        Ok(manager)
    }

    /// Source retained for reloads, if any.
    pub fn source(&self) -> Option<&ConfigSource> {
        self.source.as_ref()
    }

    /// The active snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Repository registered for `path`.
    pub fn lookup(&self, path: &str) -> StateResult<RepositoryDescriptor> {
        self.snapshot().table.lookup(path).cloned()
    }

    /// Host and every repository from one snapshot.
    pub fn list_all(&self) -> Arc<RoutingTable> {
        self.snapshot().table.clone()
    }

    /// Copy of the active configuration.
    pub fn current_configuration(&self) -> Configuration {
        self.snapshot().configuration.clone()
    }

    /// Cache lifetime of the active configuration.
    pub fn cache_max_age(&self) -> u64 {
        self.snapshot().configuration.cache_max_age
    }

    /// Validate and derive `config`, then swap it in.
    ///
    /// # Errors
    ///
    /// `StateError::InvalidConfiguration`; the active state is untouched.
    pub fn replace(&self, config: Configuration) -> StateResult<usize> {
        let snapshot = match Snapshot::build(config) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected configuration replacement");
                return Err(e);
            }
        };
        let paths = snapshot.table.len();
        let host = snapshot.table.host().to_string();

        *self.current.write() = Arc::new(snapshot);

        tracing::info!(host = %host, paths, "Vanity state replaced");
        Ok(paths)
    }

    /// Re-read the retained source and swap it in.
    ///
    /// # Errors
    ///
    /// `StateError::NoSource` if the state was not loaded from a source, or
    /// any load or validation error. The active state is untouched.
    pub fn reload(&self) -> StateResult<usize> {
        let source = self.source.as_ref().ok_or(StateError::NoSource)?;
        let config = source.load().map_err(|e| {
            tracing::warn!(
                path = %source.path().display(),
                error = %e,
                "Configuration reload failed"
            );
            e
        })?;
        let paths = self.replace(config)?;
        tracing::info!(path = %source.path().display(), paths, "Configuration reloaded");
        Ok(paths)
    }
}

impl VanityStateProvider for StateManager {
    fn lookup(&self, path: &str) -> StateResult<RepositoryDescriptor> {
        StateManager::lookup(self, path)
    }

    fn list_all(&self) -> Arc<RoutingTable> {
        StateManager::list_all(self)
    }

    fn current_configuration(&self) -> Configuration {
        StateManager::current_configuration(self)
    }

    fn cache_max_age(&self) -> u64 {
        StateManager::cache_max_age(self)
    }

    fn replace(&self, config: Configuration) -> StateResult<usize> {
        StateManager::replace(self, config)
    }

    fn reload(&self) -> StateResult<usize> {
        StateManager::reload(self)
    }
}
