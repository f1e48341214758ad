use crate::error::{ReportError, Result};
use crate::key::KeyScheme;
use serde::Deserialize;

/// Report cache settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportCacheConfig {
    /// How storage keys are rendered.
    pub key_scheme: KeyScheme,

    /// Characters of a storage key included in log lines.
    pub log_key_prefix_len: usize,
}

impl Default for ReportCacheConfig {
    fn default() -> Self {
        Self {
            key_scheme: KeyScheme::Distinct,
            log_key_prefix_len: 40,
        }
    }
}

impl ReportCacheConfig {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReportError::InvalidConfig(e.to_string()))
    }
}
