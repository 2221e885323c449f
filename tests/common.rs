#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use prayergraph::config::{Config, Settings};
use prayergraph::utils::format_minutes;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "#,Day,Gregorian Date,Hijri Date,Fajr,Shuruq,Zuhr,Assr,Maghrib,Ishaa";

/// First two rows of the Aachen 2025 table.
pub const AACHEN_ROWS: [&str; 2] = [
    "1,Wed,2025-01-01,1446/7/1,06:37,08:33,12:45,14:26,16:46,18:36",
    "2,Thu,2025-01-02,1446/7/2,06:37,08:33,12:45,14:27,16:47,18:36",
];

pub fn pg() -> Command {
    cargo_bin_cmd!("prayergraph")
}

pub fn settings() -> Settings {
    Config::default().validate().expect("default config is valid")
}

/// Fresh directory inside the system temp dir, named after the test
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("prayergraph_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `<dir>/<file_name>` with the standard header and the given rows
pub fn write_table(dir: &PathBuf, file_name: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(file_name);
    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(&path, content).expect("write table");
    path
}

pub fn aachen_rows() -> Vec<String> {
    AACHEN_ROWS.iter().map(|s| s.to_string()).collect()
}

/// `days` consecutive rows from 2025-01-01 with chronologically ordered times
/// that drift a little from day to day.
pub fn synthetic_rows(days: u32) -> Vec<String> {
    let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..days)
        .map(|i| {
            let date = start + chrono::Days::new(i as u64);
            let drift = (i % 90) as i64;
            let times = [
                397 - drift,
                513 - drift,
                765,
                866 + drift / 2,
                1006 + drift,
                1116 + drift,
            ];
            let cells: Vec<String> = times.iter().map(|m| format_minutes(*m)).collect();
            format!("{},X,{},-,{}", i + 1, date.format("%Y-%m-%d"), cells.join(","))
        })
        .collect()
}
