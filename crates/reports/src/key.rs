//! Storage key derivation.
//!
//! A key is the report type followed by the start, end and accounting time,
//! joined with `!`: `Revenue!2024-01-01!2024-01-31!06:00:00`.

use crate::query::ReportQuery;
use serde::Deserialize;
use std::fmt;

/// Segment delimiter.
pub const KEY_DELIMITER: char = '!';

/// Text every value segment takes under `KeyScheme::Legacy`.
///
/// Pages that wrote keys from the property `value.toString` rather than the
/// call `value.toString()` stored the function source instead of the value.
pub const LEGACY_SEGMENT: &str = "function toString() { [native code] }";

/// How value segments are rendered into a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScheme {
    /// Each segment is the value itself; distinct queries get distinct keys.
    #[default]
    Distinct,
    /// Every value segment is `LEGACY_SEGMENT`, so all queries of one report
    /// type share a single key. Only for reading sessions written that way.
    Legacy,
}

impl KeyScheme {
    /// Key under which the report for `query` is stored.
    pub fn key_for(self, query: &ReportQuery) -> StorageKey {
        match self {
            Self::Distinct => derive_key(
                query.report_type.label(),
                query.start.format("%Y-%m-%d"),
                query.end.format("%Y-%m-%d"),
                query.accounting_time.format("%H:%M:%S"),
            ),
            Self::Legacy => derive_key(
                query.report_type.label(),
                LEGACY_SEGMENT,
                LEGACY_SEGMENT,
                LEGACY_SEGMENT,
            ),
        }
    }
}

/// Key addressing one stored report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// At most `max_chars` leading characters, for log lines.
    pub fn prefix(&self, max_chars: usize) -> &str {
        match self.0.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<String> for StorageKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join the four parts of a report's identity into a key.
///
/// Empty parts produce empty segments; there are no error cases.
pub fn derive_key(
    report_type: &str,
    start: impl fmt::Display,
    end: impl fmt::Display,
    accounting_time: impl fmt::Display,
) -> StorageKey {
    let d = KEY_DELIMITER;
    let key = format!("{report_type}{d}{start}{d}{end}{d}{accounting_time}");
    tracing::trace!("Key is: {}", key);
    StorageKey(key)
}
