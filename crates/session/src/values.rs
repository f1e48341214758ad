//! Session value helpers.

use crate::fatal::{ErrorAction, FatalError};
use crate::{KeyValueStore, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Record a fatal error whenever a described lookup misses.
    pub fatal_on_missing: bool,
}

/// A key-value store plus the lookup conventions pages rely on.
///
/// Empty text counts as missing for lookups. `Session` also implements
/// `KeyValueStore`, passing raw calls straight through, so it can back a
/// report cache directly.
pub struct Session<S> {
    store: S,
    config: SessionConfig,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    pub fn with_config(store: S, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Value at `key`, or `None` if absent or empty.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.get_described(key, key)
    }

    /// Like `get_value`, with a human-readable name for the key used when
    /// reporting a miss.
    pub fn get_described(&self, key: &str, what_is_it: &str) -> Result<Option<String>> {
        match self.store.get(key)? {
            Some(value) if !value.is_empty() => Ok(Some(value)),
            _ => {
                tracing::debug!("No session value for {}", what_is_it);
                if self.config.fatal_on_missing {
                    FatalError::new(
                        format!(
                            "Cannot find critical session key: {what_is_it} in your session. Aborting operation."
                        ),
                        0,
                        ErrorAction::GotoMain,
                    )
                    .record(&self.store)?;
                }
                Ok(None)
            }
        }
    }

    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.store.set(key, value)
    }

    pub fn clear_value(&self, key: &str) -> Result<()> {
        self.store.remove(key)
    }

    pub fn clear_all(&self) -> Result<()> {
        self.store.clear()
    }
}

impl<S: KeyValueStore> KeyValueStore for Session<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.store.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.store.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(key)
    }

    fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}
