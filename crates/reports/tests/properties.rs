use atlas_reports::{derive_key, KeyScheme, Report, ReportCache, ReportQuery, ReportType};
use atlas_session::InMemorySessionStore;
use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;
use serde_json::json;

fn report_type() -> impl Strategy<Value = ReportType> {
    prop::sample::select(ReportType::VARIANTS.to_vec())
}

fn query() -> impl Strategy<Value = ReportQuery> {
    (report_type(), 0i64..20_000, 0i64..400, 0u32..86_400).prop_map(
        |(report_type, start_offset, span, seconds)| {
            let epoch = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
            let start = epoch + Duration::days(start_offset);
            ReportQuery::new(
                report_type,
                start,
                start + Duration::days(span),
                NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap(),
            )
        },
    )
}

fn report() -> impl Strategy<Value = Report> {
    (any::<i64>(), ".*", any::<bool>(), prop::collection::vec(any::<u32>(), 0..8)).prop_map(
        |(total, label, closed, rows)| {
            json!({"total": total, "label": label, "closed": closed, "rows": rows, "note": null})
        },
    )
}

proptest! {
    #[test]
    fn test_derive_key_is_deterministic(t in "[A-Za-z]{1,10}", s in ".*", e in ".*", a in ".*") {
        prop_assert_eq!(
            derive_key(&t, &s, &e, &a),
            derive_key(&t, s.clone(), e.clone(), a.clone())
        );
    }

    #[test]
    fn test_distinct_queries_get_distinct_keys(a in query(), b in query()) {
        prop_assume!(a != b);
        prop_assert_ne!(KeyScheme::Distinct.key_for(&a), KeyScheme::Distinct.key_for(&b));
    }

    #[test]
    fn test_store_then_fetch_round_trips(q in query(), r in report()) {
        let cache = ReportCache::new(InMemorySessionStore::new());
        prop_assert!(cache.store(&r, &q).unwrap());
        prop_assert_eq!(cache.fetch::<Report>(&q).unwrap(), Some(r.clone()));
        prop_assert_eq!(cache.fetch_last::<Report>().unwrap(), Some(r));
    }

    #[test]
    fn test_second_store_is_a_payload_no_op(q in query(), first in report(), second in report()) {
        let cache = ReportCache::new(InMemorySessionStore::new());
        cache.store(&first, &q).unwrap();
        prop_assert!(!cache.store(&second, &q).unwrap());
        prop_assert_eq!(cache.fetch::<Report>(&q).unwrap(), Some(first));
    }
}
