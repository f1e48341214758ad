//! Report cache over a session store.
//!
//! Reports are stored as JSON under a key derived from their query. The first
//! write for a key wins; later stores for the same query leave the payload
//! alone. Every store also moves the last pointer (`LastProLinkKey`,
//! `ReportType`, `ReportDateSuffix`) so the most recent report can be fetched
//! without its filter parameters.

use crate::config::ReportCacheConfig;
use crate::date::date_range_suffix;
use crate::error::Result;
use crate::key::{KeyScheme, StorageKey};
use crate::query::{ReportQuery, ReportType};
use atlas_session::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Mutex;

pub const LAST_KEY: &str = "LastProLinkKey";
pub const LAST_REPORT_TYPE_KEY: &str = "ReportType";
pub const LAST_DATE_SUFFIX_KEY: &str = "ReportDateSuffix";

/// Metadata of the most recently stored report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastPointer {
    pub key: StorageKey,
    /// `None` if the type entry was removed from the session.
    pub report_type: Option<ReportType>,
    /// e.g. `01-01-2024 to 01-31-2024`
    pub date_suffix: Option<String>,
}

pub struct ReportCache<S> {
    store: S,
    config: ReportCacheConfig,
    // Held across the check-then-write in `store` so two callers cannot both
    // see a key as absent.
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> ReportCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, ReportCacheConfig::default())
    }

    pub fn with_config(store: S, config: ReportCacheConfig) -> Self {
        Self {
            store,
            config,
            write_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &ReportCacheConfig {
        &self.config
    }

    pub fn store_ref(&self) -> &S {
        &self.store
    }

    pub fn key_scheme(&self) -> KeyScheme {
        self.config.key_scheme
    }

    /// Key the report for `query` lives under.
    pub fn key_for(&self, query: &ReportQuery) -> StorageKey {
        self.config.key_scheme.key_for(query)
    }

    /// Cache `report` under `query` and make it the last stored report.
    ///
    /// Returns `true` if the report was not already stored. An existing
    /// payload is never overwritten, but the last pointer moves either way.
    pub fn store<R: Serialize + ?Sized>(&self, report: &R, query: &ReportQuery) -> Result<bool> {
        let key = self.key_for(query);
        let suffix = date_range_suffix(query.start, query.end);
        let partial = key.prefix(self.config.log_key_prefix_len);

        let _guard = self.write_lock.lock().expect("report cache mutex poisoned");

        let was_new = self.store.get(key.as_str())?.is_none();
        if was_new {
            let json = serde_json::to_string(report)?;
            self.store.set(key.as_str(), &json)?;
            tracing::info!(
                report_type = %query.report_type,
                "Newly storing report data for dates: {} in (partial) key: {}",
                suffix,
                partial
            );
        } else {
            tracing::debug!(
                report_type = %query.report_type,
                "Found existing report data for dates: {} in (partial) key: {}",
                suffix,
                partial
            );
        }

        self.store.set(LAST_KEY, key.as_str())?;
        self.store.set(LAST_REPORT_TYPE_KEY, query.report_type.label())?;
        self.store.set(LAST_DATE_SUFFIX_KEY, &suffix)?;

        Ok(was_new)
    }

    /// Report previously stored for `query`, if any.
    pub fn fetch<R: DeserializeOwned>(&self, query: &ReportQuery) -> Result<Option<R>> {
        let key = self.key_for(query);
        self.read_payload(&key)
    }

    /// The report written by the most recent `store`, if any.
    pub fn fetch_last<R: DeserializeOwned>(&self) -> Result<Option<R>> {
        let Some(key) = self.last_key()? else {
            tracing::debug!("No last stored report in session");
            return Ok(None);
        };
        tracing::debug!(
            "Last stored report key (partial): {}",
            key.prefix(self.config.log_key_prefix_len)
        );

        let report = self.read_payload(&key)?;
        if report.is_none() {
            tracing::warn!(
                "Last pointer references a missing report: {}",
                key.prefix(self.config.log_key_prefix_len)
            );
        }
        Ok(report)
    }

    /// Key, type and date range of the most recently stored report.
    pub fn last_pointer(&self) -> Result<Option<LastPointer>> {
        let Some(key) = self.last_key()? else {
            return Ok(None);
        };
        let report_type = self
            .store
            .get(LAST_REPORT_TYPE_KEY)?
            .map(|label| label.parse::<ReportType>())
            .transpose()?;
        let date_suffix = self.store.get(LAST_DATE_SUFFIX_KEY)?;

        Ok(Some(LastPointer {
            key,
            report_type,
            date_suffix,
        }))
    }

    fn last_key(&self) -> Result<Option<StorageKey>> {
        let key = self
            .store
            .get(LAST_KEY)?
            .filter(|k| !k.is_empty())
            .map(StorageKey::from);
        Ok(key)
    }

    fn read_payload<R: DeserializeOwned>(&self, key: &StorageKey) -> Result<Option<R>> {
        match self.store.get(key.as_str())? {
            Some(json) if !json.is_empty() => Ok(Some(serde_json::from_str(&json)?)),
            _ => Ok(None),
        }
    }
}
