use chrono::NaiveDate;
use prayergraph::config::Config;
use prayergraph::core::Dataset;
use prayergraph::core::loader::load_from_reader;
use prayergraph::core::period::{parse_period, parse_range};
use prayergraph::errors::AppError;

mod common;
use common::{HEADER, aachen_rows, settings, synthetic_rows, temp_dir, write_table};

#[test]
fn test_load_ignores_extra_columns_and_keeps_order() {
    let s = settings();
    let input = format!("{HEADER}\n{}\n{}\n", common::AACHEN_ROWS[0], common::AACHEN_ROWS[1]);

    let recs = load_from_reader(input.as_bytes(), &s.config, &s.events).unwrap();

    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].row, 1);
    assert_eq!(recs[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert_eq!(recs[0].times[0], "06:37");
    assert_eq!(recs[1].row, 2);
    assert_eq!(recs[1].times[3], "14:27");
}

#[test]
fn test_load_missing_event_column() {
    let s = settings();
    let input = "Gregorian Date,Fajr,Shuruq,Zuhr,Asr,Maghrib,Ishaa\n\
                 2025-01-01,06:37,08:33,12:45,14:26,16:46,18:36\n";

    match load_from_reader(input.as_bytes(), &s.config, &s.events) {
        Err(AppError::MissingColumn(name)) => assert_eq!(name, "Assr"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_load_invalid_date_names_row() {
    let s = settings();
    let input = format!(
        "{HEADER}\n{}\n2,Thu,02/01/2025,1446/7/2,06:37,08:33,12:45,14:27,16:47,18:36\n",
        common::AACHEN_ROWS[0]
    );

    let err = load_from_reader(input.as_bytes(), &s.config, &s.events).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn test_load_custom_delimiter_and_date_format() {
    let cfg = Config {
        delimiter: ';',
        date_format: "%d.%m.%Y".to_string(),
        date_column: "Datum".to_string(),
        ..Config::default()
    };
    let s = cfg.validate().unwrap();
    let input = "Datum;Fajr;Shuruq;Zuhr;Assr;Maghrib;Ishaa\n\
                 01.01.2025;06:37;08:33;12:45;14:26;16:46;18:36\n";

    let recs = load_from_reader(input.as_bytes(), &s.config, &s.events).unwrap();
    assert_eq!(recs[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
}

#[test]
fn test_header_only_table_is_empty() {
    let s = settings();
    let recs = load_from_reader(format!("{HEADER}\n").as_bytes(), &s.config, &s.events).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn test_dataset_load_uses_file_stem_and_filters_period() {
    let dir = temp_dir("dataset_load");
    let path = write_table(&dir, "Aachen.csv", &synthetic_rows(90));

    let ds = Dataset::load(&path, &settings()).unwrap();
    assert_eq!(ds.id, "Aachen");
    assert_eq!(ds.records.len(), 90);

    let feb = ds.within(parse_period(Some("2025-02")).unwrap());
    assert_eq!(feb.records.len(), 28);
    assert!(feb.records.iter().all(|r| r.date().format("%m").to_string() == "02"));
}

#[test]
fn test_dataset_load_reports_bad_cell() {
    let dir = temp_dir("dataset_bad_cell");
    let mut rows = aachen_rows();
    rows.push("3,Fri,2025-01-03,1446/7/3,06:37,08:33,12:45,14:27,16:48,1836".to_string());
    let path = write_table(&dir, "Broken.csv", &rows);

    match Dataset::load(&path, &settings()) {
        Err(AppError::InvalidCell { row, column, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(column, "Ishaa");
        }
        other => panic!("expected InvalidCell, got {other:?}"),
    }
}

#[test]
fn test_unreadable_file_is_an_input_error() {
    let dir = temp_dir("dataset_missing_file");
    let err = Dataset::load(&dir.join("nope.csv"), &settings()).unwrap_err();
    assert!(matches!(err, AppError::Csv(_) | AppError::Io(_)));
}

#[test]
fn test_parse_range_formats() {
    let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();

    assert_eq!(parse_range("2025").unwrap(), (d(2025, 1, 1), d(2025, 12, 31)));
    assert_eq!(parse_range("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
    assert_eq!(parse_range("2025-03-04").unwrap(), (d(2025, 3, 4), d(2025, 3, 4)));
    assert_eq!(
        parse_range("2025-01:2025-03").unwrap(),
        (d(2025, 1, 1), d(2025, 3, 31))
    );
    assert_eq!(parse_period(Some("all")).unwrap(), None);
    assert_eq!(parse_period(None).unwrap(), None);

    for bad in ["2025-13", "25", "2025-01:2025", "2025-03:2025-01", "2025/01"] {
        assert!(
            matches!(parse_range(bad), Err(AppError::InvalidRange(_))),
            "expected InvalidRange for {bad}"
        );
    }
}
