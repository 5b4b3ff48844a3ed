//! Where the active configuration was loaded from.

use std::path::{Path, PathBuf};

use common::{Configuration, StateResult};

/// A configuration file the state can be (re)loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    path: PathBuf,
}

impl ConfigSource {
    /// Source backed by the file at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the configuration. Does not validate it.
    pub fn load(&self) -> StateResult<Configuration> {
        Configuration::from_file(&self.path)
    }
}
