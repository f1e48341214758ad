//! Example: Cache reports in a file-backed session and read them back.
//!
//! Run with: cargo run -p atlas-reports --example report_session [session.db]
//!
//! Running it twice against the same file shows the first-write-wins policy:
//! the second run finds the January report already cached.

use atlas_reports::{Report, ReportCache, ReportQuery, ReportType};
use atlas_session::{Session, SessionConfig, SqliteSessionStore};
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,atlas=debug")),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("atlas-session.db"));
    println!("=== Report Session Example ===");
    println!("Session file: {}\n", path.display());

    let session = Session::with_config(
        SqliteSessionStore::open(&path)?,
        SessionConfig {
            fatal_on_missing: false,
        },
    );
    let cache = ReportCache::new(session);

    let january = ReportQuery::new(
        ReportType::Revenue,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    );

    let was_new = cache.store(&json!({"total": 100, "machines": 12}), &january)?;
    println!("Stored January revenue: {}", if was_new { "new" } else { "already cached" });

    let fetched: Option<Report> = cache.fetch(&january)?;
    println!("Fetched by query: {}", fetched.unwrap_or_default());

    if let Some(pointer) = cache.last_pointer()? {
        println!(
            "Last report: {} ({})",
            pointer.report_type.map(|t| t.label()).unwrap_or("(unknown)"),
            pointer.date_suffix.as_deref().unwrap_or("no dates")
        );
    }
    let last: Option<Report> = cache.fetch_last()?;
    println!("Fetched last: {}", last.unwrap_or_default());

    Ok(())
}
