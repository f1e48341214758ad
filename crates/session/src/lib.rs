//! Session-scoped key-value storage.
//!
//! This crate provides:
//! - The `KeyValueStore` contract (get/set/remove/clear over text values)
//! - An in-memory store with an optional byte quota
//! - A SQLite-backed store for sessions that outlive the process
//! - `Session`, a wrapper adding described lookups and fatal-error recording
//!
//! # Example
//!
//! ```ignore
//! use atlas_session::{InMemorySessionStore, KeyValueStore};
//!
//! let store = InMemorySessionStore::new();
//! store.set("ReportType", "Revenue")?;
//! assert_eq!(store.get("ReportType")?.as_deref(), Some("Revenue"));
//! ```

mod fatal;
mod memory;
mod sqlite;
mod values;

pub use fatal::{
    pending_action, ErrorAction, FatalError, ERR_ACTION_KEY, ERR_CODE_KEY, ERR_MESSAGE_KEY,
};
pub use memory::InMemorySessionStore;
pub use sqlite::SqliteSessionStore;
pub use values::{Session, SessionConfig};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("quota of {limit} bytes exceeded while writing key '{key}'")]
    QuotaExceeded { key: String, limit: usize },
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// String-keyed text store shared by everything in a session.
///
/// Values go in and come back out as the same text; no format is imposed.
/// Implementations guard their own state, so a store can be shared across
/// threads behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value at `key`, or `None` if nothing was written there.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` at `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Removes every key.
    fn clear(&self) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
