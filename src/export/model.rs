// src/export/model.rs

use crate::models::{DurationRecord, Segment};
use serde::Serialize;

/// Flat row for exporting one day's durations (minutes).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DurationExport {
    pub row: usize,
    pub date: String,
    pub midnight_to_first: i64,
    pub first_to_second: i64,
    pub second_to_third: i64,
    pub third_to_fourth: i64,
    pub fourth_to_fifth: i64,
    pub fifth_to_sixth: i64,
    pub sixth_to_midnight: i64,
    pub total: i64,
}

impl From<&DurationRecord> for DurationExport {
    fn from(d: &DurationRecord) -> Self {
        let s = d.spans;
        Self {
            row: d.row,
            date: d.date.format("%Y-%m-%d").to_string(),
            midnight_to_first: s[0],
            first_to_second: s[1],
            second_to_third: s[2],
            third_to_fourth: s[3],
            fourth_to_fifth: s[4],
            fifth_to_sixth: s[5],
            sixth_to_midnight: s[6],
            total: d.total(),
        }
    }
}

/// Headers for XLSX, same order as the serde fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    let mut h = vec!["row", "date"];
    h.extend(Segment::ALL.iter().map(|s| s.as_str()));
    h.push("total");
    h
}

/// Numeric cells of a row, after `row` and `date`.
pub(crate) fn minutes_of(e: &DurationExport) -> [i64; 8] {
    [
        e.midnight_to_first,
        e.first_to_second,
        e.second_to_third,
        e.third_to_fourth,
        e.fourth_to_fifth,
        e.fifth_to_sixth,
        e.sixth_to_midnight,
        e.total,
    ]
}
