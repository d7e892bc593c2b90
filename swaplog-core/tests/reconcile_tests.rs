//! End-to-end reconciliation tests
//!
//! Exercises the whole pipeline (seed + injected sheet rows → parse →
//! merge → derive → filter) the way a host would drive it, including the
//! degradation paths: schema-rejected sources, unparseable dates, fetch
//! failures.

use chrono::NaiveDate;
use swaplog_core::fetch::FetchError;
use swaplog_core::intervals::derive_intervals;
use swaplog_core::merge::merge;
use swaplog_core::seed::SeedTable;
use swaplog_core::{FilterCriteria, Reconciler, Severity};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sheet_row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Seed table holding exactly the SEC 3 handoff history on HS-PGY
fn sec3_seed() -> SeedTable {
    SeedTable::from_toml_str(
        r#"
        [[rows]]
        date = "2025-01-01"
        aircraft = "HS-PGY"
        position = "SEC 3"
        serial = "SN-756"

        [[rows]]
        date = "2025-09-01"
        aircraft = "HS-PGY"
        position = "SEC 3"
        serial = "SN-590"

        [[rows]]
        date = "2025-10-05"
        aircraft = "HS-PGY"
        position = "SEC 3"
        serial = "SN-851"
        "#,
    )
    .unwrap()
}

#[test]
fn test_scenario_a_three_part_handoff() {
    let report = Reconciler::new(sec3_seed(), None)
        .reconcile_rows(None, date(2025, 12, 1))
        .unwrap();

    let got: Vec<(&str, NaiveDate, NaiveDate)> = report
        .intervals
        .iter()
        .map(|i| (i.event.serial.as_str(), i.event.occurred_at, i.active_until))
        .collect();

    assert_eq!(
        got,
        vec![
            ("SN-756", date(2025, 1, 1), date(2025, 9, 1)),
            ("SN-590", date(2025, 9, 1), date(2025, 10, 5)),
            ("SN-851", date(2025, 10, 5), date(2025, 12, 1)),
        ]
    );
}

#[test]
fn test_scenario_b_narrow_source_rejected_seed_only() {
    let rows = vec![sheet_row(&["ts", "01/11/2025", "HS-PGY", "SEC 3"])];
    let report = Reconciler::new(sec3_seed(), None)
        .reconcile_rows(Some(Ok(rows)), date(2025, 12, 1))
        .unwrap();

    // Seed-only result, no propagated error
    assert_eq!(report.events.len(), 3);
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.severity == Severity::Error && d.message.contains("source rejected")));
}

#[test]
fn test_scenario_c_invalid_calendar_date_dropped() {
    let rows = vec![
        sheet_row(&["ts", "31/02/2025", "HS-PGY", "SEC 3", "SN-900", "bad date"]),
        sheet_row(&["ts", "01/11/2025", "HS-PGY", "SEC 3", "SN-901", "good date"]),
    ];
    let report = Reconciler::new(sec3_seed(), None)
        .reconcile_rows(Some(Ok(rows)), date(2025, 12, 1))
        .unwrap();

    assert_eq!(report.events.len(), 4);
    assert!(report.events.iter().any(|e| e.serial == "SN-901"));
    assert!(report.events.iter().all(|e| e.serial != "SN-900"));
    assert!(report
        .diagnostics
        .iter()
        .any(|d| d.severity == Severity::Warning && d.message.contains("1 row(s)")));
}

#[test]
fn test_scenario_d_position_filter_subsequence() {
    let seed = SeedTable::from_toml_str(
        r#"
        [[rows]]
        date = "2025-01-01"
        aircraft = "HS-PGY"
        position = "SEC 3"
        serial = "A"

        [[rows]]
        date = "2025-02-01"
        aircraft = "HS-PGY"
        position = "ELAC 1"
        serial = "B"

        [[rows]]
        date = "2025-03-01"
        aircraft = "HS-PGY"
        position = "SEC 3"
        serial = "C"
        "#,
    )
    .unwrap();

    let report = Reconciler::new(seed, None)
        .reconcile_rows(None, date(2025, 6, 1))
        .unwrap();
    let criteria = FilterCriteria {
        positions: ["SEC 3".to_string()].into_iter().collect(),
        ..Default::default()
    };
    let out = report.filtered(&criteria);

    let serials: Vec<&str> = out.iter().map(|i| i.event.serial.as_str()).collect();
    assert_eq!(serials, vec!["A", "C"]);
    // Subsequence: every filtered interval appears unchanged in the full set
    for interval in &out {
        assert!(report.intervals.contains(interval));
    }
}

#[test]
fn test_fetch_failure_never_propagates() {
    for failure in [
        FetchError::Network("dns".to_string()),
        FetchError::Status(500),
        FetchError::Decode("bad csv".to_string()),
    ] {
        let report = Reconciler::new(sec3_seed(), None)
            .reconcile_rows(Some(Err(failure)), date(2025, 12, 1))
            .unwrap();
        assert_eq!(report.events.len(), 3);
    }
}

#[test]
fn test_merge_then_derive_is_idempotent() {
    let seed_events = sec3_seed().events().unwrap();
    let now = date(2025, 12, 1);

    let first = derive_intervals(&merge(vec![seed_events.clone()]), now);
    let second = derive_intervals(&merge(vec![seed_events]), now);
    assert_eq!(first, second);
}

#[test]
fn test_changing_now_touches_only_open_intervals() {
    let reconciler = Reconciler::new(sec3_seed(), None);
    let early = reconciler.reconcile_rows(None, date(2025, 12, 1)).unwrap();
    let late = reconciler.reconcile_rows(None, date(2026, 1, 15)).unwrap();

    assert_eq!(early.events, late.events);
    for (a, b) in early.intervals.iter().zip(&late.intervals) {
        assert_eq!(a.event, b.event);
        if a != b {
            // Only the trailing open interval may differ, and only in its end
            assert_eq!(a.active_until, date(2025, 12, 1));
            assert_eq!(b.active_until, date(2026, 1, 15));
        }
    }
}

#[test]
fn test_equal_date_tie_break_seed_before_sheet() {
    // Sheet reports a swap on the same date as the last seed row; the seed
    // row sorts first, so its interval is zero-length and the sheet part
    // becomes the active occupant.
    let rows = vec![sheet_row(&[
        "ts",
        "05/10/2025",
        "HS-PGY",
        "SEC 3",
        "SN-999",
        "same-day re-swap",
    ])];
    let now = date(2025, 12, 1);
    let report = Reconciler::new(sec3_seed(), None)
        .reconcile_rows(Some(Ok(rows)), now)
        .unwrap();

    let sec3: Vec<_> = report
        .intervals
        .iter()
        .filter(|i| i.event.position == "SEC 3")
        .collect();
    assert_eq!(sec3.len(), 4);
    assert_eq!(sec3[2].event.serial, "SN-851");
    assert_eq!(sec3[2].active_until, date(2025, 10, 5)); // zero-length, legal
    assert_eq!(sec3[3].event.serial, "SN-999");
    assert_eq!(sec3[3].active_until, now);
}

#[test]
fn test_monotonic_handoff_across_mixed_sources() {
    let rows = vec![
        sheet_row(&["ts", "20/11/2025", "HS-PGY", "SEC 3", "SN-902", ""]),
        sheet_row(&["ts", "10/11/2025", "HS-PGY", "SEC 3", "SN-901", ""]),
    ];
    let report = Reconciler::new(sec3_seed(), None)
        .reconcile_rows(Some(Ok(rows)), date(2025, 12, 1))
        .unwrap();

    let mut prev = None;
    for interval in report.intervals.iter().filter(|i| i.event.position == "SEC 3") {
        if let Some(prev) = prev {
            assert!(interval.active_until >= prev);
        }
        assert!(interval.active_until >= interval.event.occurred_at);
        prev = Some(interval.active_until);
    }
}

#[test]
fn test_empty_seed_and_no_sheet_yields_empty_report() {
    let report = Reconciler::new(SeedTable::from_toml_str("").unwrap(), None)
        .reconcile_rows(None, date(2025, 12, 1))
        .unwrap();
    assert!(report.events.is_empty());
    assert!(report.intervals.is_empty());
    assert!(!report.diagnostics.is_empty());
}
