use prayergraph::core::normalize_record;
use prayergraph::errors::AppError;
use prayergraph::models::DailyRecord;
use prayergraph::utils::{format_minutes, parse_minutes};

mod common;
use common::settings;

fn record(row: usize, times: [&str; 6]) -> DailyRecord {
    DailyRecord {
        row,
        date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        times: times.map(|t| t.to_string()),
    }
}

#[test]
fn test_parse_minutes_is_hours_times_sixty_plus_minutes() {
    assert_eq!(parse_minutes("00:00").unwrap(), 0);
    assert_eq!(parse_minutes("06:37").unwrap(), 397);
    assert_eq!(parse_minutes("6:37").unwrap(), 397);
    assert_eq!(parse_minutes(" 18:36 ").unwrap(), 1116);
    assert_eq!(parse_minutes("23:59").unwrap(), 1439);
}

#[test]
fn test_parse_minutes_inverts_format_minutes_over_whole_day() {
    for m in 0..1440 {
        let s = format_minutes(m);
        assert_eq!(s.len(), 5, "expected zero-padded HH:MM, got {s}");
        assert_eq!(parse_minutes(&s).unwrap(), m);
    }
}

#[test]
fn test_parse_minutes_rejects_malformed_input() {
    for bad in [
        "", "0637", "06:37:00", ":37", "06:", "ab:cd", "06:3x", "-1:30", "+1:30", "24:00",
        "12:60", "06 :37",
    ] {
        match parse_minutes(bad) {
            Err(AppError::InvalidTime(_)) => {}
            other => panic!("expected InvalidTime for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_normalize_record_scenario_a_offsets() {
    let s = settings();
    let rec = record(1, ["06:37", "08:33", "12:45", "14:26", "16:46", "18:36"]);

    let n = normalize_record(rec.clone(), &s.events).unwrap();

    assert_eq!(n.offsets, [397, 513, 765, 866, 1006, 1116]);
    assert_eq!(n.record, rec);
    assert!((n.hours(0) - 397.0 / 60.0).abs() < 1e-12);
}

#[test]
fn test_normalize_record_reports_row_and_column() {
    let s = settings();
    let rec = record(7, ["06:37", "08:33", "12:45", "14-26", "16:46", "18:36"]);

    let err = normalize_record(rec, &s.events).unwrap_err();
    match &err {
        AppError::InvalidCell { row, column, .. } => {
            assert_eq!(*row, 7);
            assert_eq!(column, "Assr");
        }
        other => panic!("expected InvalidCell, got {other:?}"),
    }
    assert!(err.to_string().contains("14-26"));
}
