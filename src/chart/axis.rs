//! Axis helpers shared by both chart kinds.

use crate::models::NormalizedRecord;
use crate::utils::date::month_starts;
use chrono::{Days, NaiveDate};
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use std::ops::Range;

/// Linear f64 axis whose gridlines sit on fixed positions.
///
/// `major` positions carry labels and bold gridlines; `minor` positions get
/// light gridlines only. Tick placement never depends on the pixel size.
#[derive(Clone)]
pub struct MarkedAxis {
    linear: RangedCoordf64,
    major: Vec<f64>,
    minor: Vec<f64>,
}

impl MarkedAxis {
    pub fn new(range: Range<f64>, major: Vec<f64>) -> Self {
        Self {
            linear: range.into(),
            minor: major.clone(),
            major,
        }
    }

    pub fn with_minor(mut self, minor: Vec<f64>) -> Self {
        self.minor = minor;
        self
    }

    pub fn major(&self) -> &[f64] {
        &self.major
    }

    pub fn minor(&self) -> &[f64] {
        &self.minor
    }
}

impl Ranged for MarkedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.linear.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            self.minor.clone()
        } else {
            self.major.clone()
        }
    }

    fn range(&self) -> Range<f64> {
        self.linear.range()
    }
}

/// Day-index axis from `first` to `last` with one gridline per calendar month.
pub fn month_axis(first: NaiveDate, last: NaiveDate) -> MarkedAxis {
    let days = (last - first).num_days() as f64 + 1.0;
    MarkedAxis::new(0.0..days, month_markers(first, last))
}

/// Hour axis over `from..to` hours: labels every `major` hours, light lines every hour.
pub fn hour_axis(from: u32, to: u32, major: u32) -> MarkedAxis {
    MarkedAxis::new(f64::from(from)..f64::from(to), hour_marks(from, to, major))
        .with_minor(hour_marks(from, to, 1))
}

/// Hour units → "HH:MM", floor hour plus remainder minutes.
///
/// The value is snapped to the nearest whole minute first so that offsets
/// which went through `/ 60.0` come back exactly (397 / 60 → "06:37").
pub fn hours_label(x: f64) -> String {
    let total = (x * 60.0).round().max(0.0) as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Inclusive date span covered by the records.
pub fn date_span(records: &[NormalizedRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let first = records.iter().map(|r| r.date()).min()?;
    let last = records.iter().map(|r| r.date()).max()?;
    Some((first, last))
}

/// Day index of `date` on an axis starting at `first`.
pub fn day_index(first: NaiveDate, date: NaiveDate) -> f64 {
    (date - first).num_days() as f64
}

/// Label for a day index: the month it falls in.
pub fn month_label(first: NaiveDate, x: f64) -> String {
    if x < 0.0 {
        return String::new();
    }
    first
        .checked_add_days(Days::new(x.floor() as u64))
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

/// One x position per calendar month; a span starting mid-month gets its
/// first marker on the first day shown.
pub fn month_markers(first: NaiveDate, last: NaiveDate) -> Vec<f64> {
    month_starts(first, last)
        .into_iter()
        .map(|d| day_index(first, d.max(first)))
        .collect()
}

/// Whole hours from `from` to `to`, stepping by `step`.
pub fn hour_marks(from: u32, to: u32, step: u32) -> Vec<f64> {
    (from..=to).step_by(step.max(1) as usize).map(f64::from).collect()
}
