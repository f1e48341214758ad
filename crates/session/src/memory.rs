//! In-memory session store.

use crate::{KeyValueStore, Result, SessionError};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mutex-guarded map standing in for a browser's per-tab session storage.
///
/// An optional quota caps the total bytes held (keys plus values). A write
/// that would exceed it fails with `SessionError::QuotaExceeded` and leaves
/// the previous contents in place.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemorySessionStore {
    /// Create an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once `quota` bytes are in use.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("session mutex poisoned").len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().expect("session mutex poisoned").is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .lock()
            .expect("session mutex poisoned")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Bytes currently held, counted over keys and values.
    pub fn used_bytes(&self) -> usize {
        let entries = self.entries.lock().expect("session mutex poisoned");
        used_bytes(&entries)
    }
}

fn used_bytes(entries: &HashMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

impl KeyValueStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("session mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("session mutex poisoned");

        if let Some(limit) = self.quota {
            let replaced = entries.get(key).map_or(0, |old| key.len() + old.len());
            let projected = used_bytes(&entries) - replaced + key.len() + value.len();
            if projected > limit {
                return Err(SessionError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("session mutex poisoned")
            .remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.lock().expect("session mutex poisoned").clear();
        Ok(())
    }
}
