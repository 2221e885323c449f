//! Time utilities: parsing HH:MM into minute offsets and formatting them back.

use crate::errors::{AppError, AppResult};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Convert a clock time "HH:MM" into minutes since midnight.
///
/// The string must split into exactly two colon-separated unsigned integers,
/// with hours in 0..=23 and minutes in 0..=59.
pub fn parse_minutes(t: &str) -> AppResult<i64> {
    let raw = t.trim();
    let invalid = || AppError::InvalidTime(raw.to_string());

    let (h, m) = raw.split_once(':').ok_or_else(invalid)?;
    if m.contains(':') {
        return Err(invalid());
    }

    let hours = parse_field(h).ok_or_else(invalid)?;
    let minutes = parse_field(m).ok_or_else(invalid)?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

fn parse_field(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
