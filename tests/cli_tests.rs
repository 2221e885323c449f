use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{aachen_rows, pg, synthetic_rows, temp_dir, write_table};

#[test]
fn test_year_writes_named_png() {
    let dir = temp_dir("cli_year");
    let input = write_table(&dir, "Aachen.csv", &synthetic_rows(365));

    pg().args(["year", input.to_str().unwrap(), "--no-show", "--out-dir"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("Aachen_year_graph.png"));

    let out = dir.join("Aachen_year_graph.png");
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn test_year_out_of_order_day_fails_without_chart() {
    let dir = temp_dir("cli_year_inconsistent");
    let mut rows = aachen_rows();
    rows[1] = "2,Thu,2025-01-02,1446/7/2,06:37,12:45,08:33,14:27,16:47,18:36".to_string();
    let input = write_table(&dir, "Aachen.csv", &rows);

    pg().args(["year", input.to_str().unwrap(), "--no-show", "--out-dir"])
        .arg(&dir)
        .assert()
        .failure()
        .stderr(contains("row 2").and(contains("2025-01-02")));

    assert!(!dir.join("Aachen_year_graph.png").exists());
}

#[test]
fn test_year_skip_invalid_renders_remaining_days() {
    let dir = temp_dir("cli_year_skip");
    let mut rows = synthetic_rows(10);
    rows[4] = "5,X,2025-01-05,-,06:37,12:45,08:33,14:27,16:47,18:36".to_string();
    let input = write_table(&dir, "Aachen.csv", &rows);

    pg().args(["year", input.to_str().unwrap(), "--no-show", "--skip-invalid", "--out-dir"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("Skipping row 5").and(contains("9 days")));
}

#[test]
fn test_year_range_and_svg() {
    let dir = temp_dir("cli_year_range_svg");
    let input = write_table(&dir, "Aachen.csv", &synthetic_rows(120));

    pg().args([
        "year",
        input.to_str().unwrap(),
        "--no-show",
        "--format",
        "svg",
        "--range",
        "2025-02:2025-03",
        "--out-dir",
    ])
    .arg(&dir)
    .assert()
    .success()
    .stdout(contains("59 days"));

    assert!(dir.join("Aachen_year_graph.svg").exists());
}

#[test]
fn test_year_empty_range_fails() {
    let dir = temp_dir("cli_year_empty_range");
    let input = write_table(&dir, "Aachen.csv", &aachen_rows());

    pg().args(["year", input.to_str().unwrap(), "--no-show", "--range", "2024", "--out-dir"])
        .arg(&dir)
        .assert()
        .failure()
        .stderr(contains("empty"));
}

#[test]
fn test_series_multiple_events() {
    let dir = temp_dir("cli_series");
    let input = write_table(&dir, "Aachen.csv", &synthetic_rows(40));

    pg().args([
        "series",
        input.to_str().unwrap(),
        "-e",
        "Fajr",
        "-e",
        "Ishaa",
        "--no-show",
        "--out-dir",
    ])
    .arg(&dir)
    .assert()
    .success();

    assert!(dir.join("Aachen_Fajr-Ishaa_graph.png").exists());
}

#[test]
fn test_series_unknown_event_fails() {
    let dir = temp_dir("cli_series_unknown");
    let input = write_table(&dir, "Aachen.csv", &aachen_rows());

    pg().args(["series", input.to_str().unwrap(), "-e", "Sunset", "--no-show", "--out-dir"])
        .arg(&dir)
        .assert()
        .failure()
        .stderr(contains("Sunset"));
}

#[test]
fn test_preview_prints_minute_columns() {
    let dir = temp_dir("cli_preview");
    let input = write_table(&dir, "Aachen.csv", &aachen_rows());

    pg().args(["preview", input.to_str().unwrap(), "-e", "Fajr", "-e", "Ishaa"])
        .assert()
        .success()
        .stdout(
            contains("Gregorian Date")
                .and(contains("Fajr_min"))
                .and(contains("Ishaa_min"))
                .and(contains("397"))
                .and(contains("1116")),
        );
}

#[test]
fn test_preview_malformed_time_fails() {
    let dir = temp_dir("cli_preview_bad");
    let rows = vec!["1,Wed,2025-01-01,1446/7/1,6.37,08:33,12:45,14:26,16:46,18:36".to_string()];
    let input = write_table(&dir, "Aachen.csv", &rows);

    pg().args(["preview", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Row 1").and(contains("Fajr")));
}

#[test]
fn test_durations_csv_export() {
    let dir = temp_dir("cli_durations_csv");
    let input = write_table(&dir, "Aachen.csv", &aachen_rows());
    let out = dir.join("durations.csv");

    pg().args(["durations", input.to_str().unwrap(), "--format", "csv", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "row,date,midnight_to_first,first_to_second,second_to_third,third_to_fourth,fourth_to_fifth,fifth_to_sixth,sixth_to_midnight,total"
    );
    assert_eq!(
        lines.next().unwrap(),
        "1,2025-01-01,397,116,252,101,140,110,324,1440"
    );
    assert!(lines.next().unwrap().starts_with("2,2025-01-02,"));
}

#[test]
fn test_durations_warns_on_extension_mismatch() {
    let dir = temp_dir("cli_durations_ext");
    let input = write_table(&dir, "Aachen.csv", &aachen_rows());
    let out = dir.join("durations.txt");

    pg().args(["durations", input.to_str().unwrap(), "--format", "json", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("does not end in .json"));

    assert!(fs::read_to_string(&out).unwrap().trim_start().starts_with('['));
}

#[test]
fn test_durations_json_and_xlsx_export() {
    let dir = temp_dir("cli_durations_json_xlsx");
    let input = write_table(&dir, "Aachen.csv", &synthetic_rows(31));

    let json = dir.join("durations.json");
    let path = input.to_str().unwrap();
    pg().args(["durations", path, "--format", "json", "--range", "2025-01-10", "--file"])
        .arg(&json)
        .assert()
        .success();
    let content = fs::read_to_string(&json).unwrap();
    assert!(content.contains("\"date\": \"2025-01-10\""));
    assert!(content.contains("\"total\": 1440"));
    assert!(!content.contains("2025-01-11"));

    let xlsx = dir.join("durations.xlsx");
    pg().args(["durations", input.to_str().unwrap(), "--format", "xlsx", "--file"])
        .arg(&xlsx)
        .assert()
        .success();
    assert!(fs::metadata(&xlsx).unwrap().len() > 0);
}

#[test]
fn test_durations_existing_file_requires_confirmation() {
    let dir = temp_dir("cli_durations_overwrite");
    let input = write_table(&dir, "Aachen.csv", &aachen_rows());
    let out = dir.join("durations.csv");
    fs::write(&out, "keep me").unwrap();

    pg().args(["durations", input.to_str().unwrap(), "--format", "csv", "--file"])
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    pg().args(["durations", input.to_str().unwrap(), "--format", "csv", "--force", "--file"])
        .arg(&out)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("row,date"));
}

#[test]
fn test_config_check_and_print() {
    pg().args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration OK").and(contains("Fajr")));

    pg().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("output_suffix").and(contains("sixth_to_midnight")));
}

#[test]
fn test_invalid_config_aborts_before_reading_input() {
    let dir = temp_dir("cli_bad_config");
    let conf = dir.join("bad.conf");
    fs::write(&conf, "events: [Fajr, Zuhr]\n").unwrap();

    pg().args(["--config", conf.to_str().unwrap(), "preview", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(contains("expected exactly 6 events"));
}

#[test]
fn test_custom_output_suffix_from_config() {
    let dir = temp_dir("cli_custom_suffix");
    let conf = dir.join("custom.conf");
    fs::write(&conf, "chart:\n  output_suffix: _durations\n  show: false\n").unwrap();
    let input = write_table(&dir, "Mecca.csv", &aachen_rows());

    pg().args(["--config", conf.to_str().unwrap(), "year", input.to_str().unwrap(), "--out-dir"])
        .arg(&dir)
        .assert()
        .success();

    assert!(dir.join("Mecca_durations.png").exists());
}

#[test]
fn test_tiny_chart_size_fails_without_output() {
    let dir = temp_dir("cli_tiny_chart");
    let conf = dir.join("tiny.conf");
    fs::write(&conf, "chart:\n  width: 100\n  height: 50\n  show: false\n").unwrap();
    let input = write_table(&dir, "Aachen.csv", &aachen_rows());

    pg().args(["--config", conf.to_str().unwrap(), "year", input.to_str().unwrap(), "--out-dir"])
        .arg(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("chart size must be at least"));

    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert!(names.iter().all(|n| !n.ends_with(".png")), "{names:?}");
}
