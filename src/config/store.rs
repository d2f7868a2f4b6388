//! Thread-safe configuration storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Config container with interior mutability.
///
/// Readers take a clone; [`ConfigStore::update`] validates a candidate and
/// swaps the whole config so a reader never observes a half-applied override.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Load from `path` and wrap the result.
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?;
        Ok(Self::new(config, path))
    }

    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-memory override (e.g. from command-line flags).
    pub fn update(&self, apply: impl FnOnce(&mut Config)) -> Result<(), ConfigError> {
        let mut candidate = self.get();
        apply(&mut candidate);
        candidate.validate()?;
        *self.inner.write() = candidate;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
