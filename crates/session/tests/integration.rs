//! Integration tests for the session crate.
//!
//! Exercises both store implementations through the shared contract.

use atlas_session::{
    pending_action, ErrorAction, FatalError, InMemorySessionStore, KeyValueStore, Session,
    SessionConfig, SessionError, SqliteSessionStore,
};
use std::sync::Arc;

fn check_contract(store: &dyn KeyValueStore) {
    assert_eq!(store.get("missing").unwrap(), None);

    store.set("ReportType", "Revenue").unwrap();
    assert_eq!(store.get("ReportType").unwrap().as_deref(), Some("Revenue"));

    store.set("ReportType", "Jackpot").unwrap();
    assert_eq!(store.get("ReportType").unwrap().as_deref(), Some("Jackpot"));

    store.set("Payload", r#"{"total":100}"#).unwrap();
    assert_eq!(
        store.get("Payload").unwrap().as_deref(),
        Some(r#"{"total":100}"#)
    );

    store.remove("ReportType").unwrap();
    assert_eq!(store.get("ReportType").unwrap(), None);
    store.remove("ReportType").unwrap();

    store.clear().unwrap();
    assert_eq!(store.get("Payload").unwrap(), None);
}

// =============================================================================
// Store Contract Tests
// =============================================================================

mod contract {
    use super::*;

    #[test]
    fn test_in_memory_store_contract() {
        check_contract(&InMemorySessionStore::new());
    }

    #[test]
    fn test_sqlite_store_contract() {
        check_contract(&SqliteSessionStore::open_in_memory().unwrap());
    }

    #[test]
    fn test_shared_store_through_arc() {
        let store = Arc::new(InMemorySessionStore::new());
        let shared: Arc<dyn KeyValueStore> = store.clone();

        shared.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_text_round_trips_unchanged() {
        let store = SqliteSessionStore::open_in_memory().unwrap();
        let text = "  línea 1\nline \"2\"\t!  ";
        store.set("k", text).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(text));
    }
}

// =============================================================================
// SQLite Persistence Tests
// =============================================================================

mod sqlite {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_open_file_store() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("session.db");

        let store = SqliteSessionStore::open(&db_path);
        assert!(store.is_ok(), "Should create file-based store");
        assert!(db_path.exists(), "Database file should exist");
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("session.db");

        {
            let store = SqliteSessionStore::open(&db_path).unwrap();
            store.set("LastProLinkKey", "Quick!a!b!c").unwrap();
        }

        {
            let store = SqliteSessionStore::open(&db_path).unwrap();
            assert_eq!(
                store.get("LastProLinkKey").unwrap().as_deref(),
                Some("Quick!a!b!c")
            );
        }
    }

    #[test]
    fn test_invalid_path_fails() {
        let result = SqliteSessionStore::open(&PathBuf::from("/nonexistent/path/session.db"));
        assert!(matches!(result, Err(SessionError::Database(_))));
    }
}

// =============================================================================
// Session Helper Tests
// =============================================================================

mod session {
    use super::*;

    #[test]
    fn test_set_get_clear_value() {
        let session = Session::new(SqliteSessionStore::open_in_memory().unwrap());

        session.set_value("ReportDateSuffix", "01-01-2024 to 01-31-2024").unwrap();
        assert_eq!(
            session.get_value("ReportDateSuffix").unwrap().as_deref(),
            Some("01-01-2024 to 01-31-2024")
        );

        session.clear_value("ReportDateSuffix").unwrap();
        assert_eq!(session.get_value("ReportDateSuffix").unwrap(), None);
    }

    #[test]
    fn test_clear_all_values() {
        let session = Session::new(InMemorySessionStore::new());
        session.set_value("a", "1").unwrap();
        session.set_value("b", "2").unwrap();

        session.clear_all().unwrap();
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_missing_critical_key_hands_off_to_error_page() {
        let session = Session::with_config(
            InMemorySessionStore::new(),
            SessionConfig {
                fatal_on_missing: true,
            },
        );

        assert_eq!(session.get_value("AuthToken").unwrap(), None);
        assert_eq!(
            pending_action(session.store()).unwrap(),
            Some(ErrorAction::GotoMain)
        );

        let recorded = FatalError::load(&session).unwrap().unwrap();
        assert!(recorded.message.contains("AuthToken"));
    }

    #[test]
    fn test_quota_failure_propagates_through_session() {
        let session = Session::new(InMemorySessionStore::with_quota(4));
        let result = session.set_value("key", "value");
        assert!(matches!(result, Err(SessionError::QuotaExceeded { .. })));
    }
}
