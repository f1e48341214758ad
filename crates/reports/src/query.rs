//! Report identity: which report, over which range.

use crate::error::ReportError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of report being cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    Quick,
    All,
    Revenue,
    Jackpot,
}

impl ReportType {
    pub const VARIANTS: [ReportType; 4] = [Self::Quick, Self::All, Self::Revenue, Self::Jackpot];

    /// Label stored in the session and used as the first key segment.
    pub fn label(self) -> &'static str {
        match self {
            Self::Quick => "Quick",
            Self::All => "All",
            Self::Revenue => "Revenue",
            Self::Jackpot => "Jackpot",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ReportError::UnknownReportType(s.to_string()))
    }
}

/// The filter parameters a report was generated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportQuery {
    pub report_type: ReportType,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Time of day at which the accounting day rolls over.
    pub accounting_time: NaiveTime,
}

impl ReportQuery {
    pub fn new(
        report_type: ReportType,
        start: NaiveDate,
        end: NaiveDate,
        accounting_time: NaiveTime,
    ) -> Self {
        Self {
            report_type,
            start,
            end,
            accounting_time,
        }
    }
}
