use crate::models::event_set::EVENT_COUNT;
use crate::models::segment::SEGMENT_COUNT;
use chrono::NaiveDate;

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub row: usize,         // 1-based data row in the source file
    pub date: NaiveDate,
    pub times: [String; EVENT_COUNT], // raw "HH:MM" in canonical order
}

impl DailyRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A daily record plus its minute offsets (0..=1439 each).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub record: DailyRecord,
    pub offsets: [i64; EVENT_COUNT],
}

impl NormalizedRecord {
    pub fn row(&self) -> usize {
        self.record.row
    }

    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    /// Offset in hour units, as plotted on the y axis.
    pub fn hours(&self, event: usize) -> f64 {
        self.offsets[event] as f64 / 60.0
    }
}

/// The seven spans partitioning one day, midnight to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRecord {
    pub row: usize,
    pub date: NaiveDate,
    pub spans: [i64; SEGMENT_COUNT],
}

impl DurationRecord {
    pub fn total(&self) -> i64 {
        self.spans.iter().sum()
    }
}
