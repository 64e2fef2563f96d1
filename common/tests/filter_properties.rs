//! 検索フィルタと選択状態のプロパティテスト
//!
//! 検証内容:
//! 1. 空の検索語は恒等
//! 2. 結果は元の並び順を保った部分列
//! 3. 結果の各レコードはタイトルかスタックに検索語を含む
//! 4. 大文字小文字を区別しない
//! 5. dismiss は冪等
//! 6. select → dismiss は常に Closed

use portfolio_common::{filter, ProjectRecord, Selection};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_record() -> impl Strategy<Value = ProjectRecord> {
    ("[A-Za-z][A-Za-z .•-]{0,20}", "[A-Za-z .•-]{0,24}")
        .prop_map(|(title, stack)| ProjectRecord::new(title, stack).unwrap())
}

fn arb_records() -> impl Strategy<Value = Vec<ProjectRecord>> {
    prop::collection::vec(arb_record(), 0..8)
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z .•]{0,4}",
        Just("react".to_string()),
        Just("MONGO".to_string()),
    ]
}

fn is_subsequence(sub: &[&ProjectRecord], full: &[ProjectRecord]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|r| r == *s))
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn empty_query_is_identity(records in arb_records()) {
        let result: Vec<ProjectRecord> = filter(&records, "").into_iter().cloned().collect();
        prop_assert_eq!(result, records);
    }

    #[test]
    fn result_is_ordered_subsequence(records in arb_records(), query in arb_query()) {
        let result = filter(&records, &query);
        prop_assert!(result.len() <= records.len());
        prop_assert!(is_subsequence(&result, &records));
    }

    #[test]
    fn every_hit_contains_query(records in arb_records(), query in arb_query()) {
        let needle = query.to_lowercase();
        for record in filter(&records, &query) {
            prop_assert!(
                record.title().to_lowercase().contains(&needle)
                    || record.stack().to_lowercase().contains(&needle)
            );
        }
    }

    #[test]
    fn every_miss_lacks_query(records in arb_records(), query in arb_query()) {
        let hits = filter(&records, &query);
        let needle = query.to_lowercase();
        for record in records.iter().filter(|r| !hits.contains(r)) {
            prop_assert!(!record.title().to_lowercase().contains(&needle));
            prop_assert!(!record.stack().to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn case_insensitive(records in arb_records(), query in "[A-Za-z]{0,5}") {
        prop_assert_eq!(
            filter(&records, &query.to_uppercase()),
            filter(&records, &query.to_lowercase())
        );
    }

    #[test]
    fn dismiss_is_idempotent(record in arb_record(), open in any::<bool>()) {
        let state = if open { Selection::Closed.select(record) } else { Selection::Closed };
        let once = state.dismiss();
        prop_assert_eq!(once.clone().dismiss(), once);
    }

    #[test]
    fn select_then_dismiss_is_closed(record in arb_record()) {
        prop_assert_eq!(Selection::Closed.select(record).dismiss(), Selection::Closed);
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────

fn scenario_records() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new("ICTAK Dataset Gallery", "MERN • Tailwind • Framer Motion").unwrap(),
        ProjectRecord::new("Event Booking System", "Node.js • MongoDB • Stripe").unwrap(),
    ]
}

#[test]
fn scenario_stack_match() {
    let records = scenario_records();
    let result = filter(&records, "mongo");
    assert_eq!(result, vec![&records[1]]);
}

#[test]
fn scenario_empty_query() {
    let records = scenario_records();
    let result = filter(&records, "");
    assert_eq!(result, vec![&records[0], &records[1]]);
}

#[test]
fn scenario_no_match() {
    let records = scenario_records();
    assert!(filter(&records, "xyz").is_empty());
}

#[test]
fn scenario_open_and_close_details() {
    let records = scenario_records();
    let event_booking = records[1].clone();

    let state = Selection::Closed.select(event_booking.clone());
    assert_eq!(state, Selection::Open(event_booking));

    let state = state.dismiss();
    assert_eq!(state, Selection::Closed);
}
