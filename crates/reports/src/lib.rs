//! Session-backed report cache.
//!
//! Generated reports are cached in the session keyed by report type and
//! filter parameters, so re-running a report with the same filters is a
//! lookup. The most recently stored report is also reachable without its
//! filters through the last pointer.
//!
//! # Example
//!
//! ```ignore
//! use atlas_reports::{ReportCache, ReportQuery, ReportType};
//! use atlas_session::InMemorySessionStore;
//!
//! let cache = ReportCache::new(InMemorySessionStore::new());
//! let query = ReportQuery::new(ReportType::Revenue, start, end, accounting_time);
//! cache.store(&json!({"total": 100}), &query)?;
//! let last: Option<Report> = cache.fetch_last()?;
//! ```

mod cache;
mod config;
mod date;
mod error;
mod key;
mod query;

pub use cache::{LastPointer, ReportCache, LAST_DATE_SUFFIX_KEY, LAST_KEY, LAST_REPORT_TYPE_KEY};
pub use config::ReportCacheConfig;
pub use date::{date_range_suffix, file_compatible_date, short_date_string};
pub use error::{ReportError, Result};
pub use key::{derive_key, KeyScheme, StorageKey, KEY_DELIMITER, LEGACY_SEGMENT};
pub use query::{ReportQuery, ReportType};

/// Untyped report payload.
pub type Report = serde_json::Value;
