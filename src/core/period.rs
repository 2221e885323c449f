//! Parse --range (year / month / day / interval) into inclusive date bounds.
//!
//! Supported:
//! - YYYY
//! - YYYY-MM
//! - YYYY-MM-DD
//! - YYYY:YYYY
//! - YYYY-MM:YYYY-MM
//! - YYYY-MM-DD:YYYY-MM-DD
//! - all (no bounds)

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

pub type Bounds = (NaiveDate, NaiveDate);

pub fn parse_period(r: Option<&str>) -> AppResult<Option<Bounds>> {
    match r.map(str::trim) {
        None => Ok(None),
        Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

pub fn parse_range(r: &str) -> AppResult<Bounds> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(invalid(r, "start and end must have same format"));
            }
            (bounds_of(s, r)?.0, bounds_of(e, r)?.1)
        }
        None => bounds_of(r.trim(), r)?,
    };

    if start > end {
        return Err(invalid(r, "start is after end"));
    }
    Ok((start, end))
}

/// Bounds of a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds_of(p: &str, whole: &str) -> AppResult<Bounds> {
    if !p.is_ascii() {
        return Err(invalid(whole, "unsupported range format"));
    }

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(whole, "invalid year"))?;
            let d1 =
                NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(whole, "invalid year"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(whole, "invalid year"))?;
            Ok((d1, d2))
        }
        7 if p.as_bytes()[4] == b'-' => {
            let y: i32 = p[0..4].parse().map_err(|_| invalid(whole, "invalid year"))?;
            let m: u32 = p[5..7].parse().map_err(|_| invalid(whole, "invalid month"))?;
            let last = month_last_day(y, m).ok_or_else(|| invalid(whole, "invalid month"))?;
            let d1 =
                NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| invalid(whole, "invalid month"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| invalid(whole, "invalid month"))?;
            Ok((d1, d2))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| invalid(whole, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(whole, "unsupported range format")),
    }
}

fn invalid(r: &str, why: &str) -> AppError {
    AppError::InvalidRange(format!("'{r}': {why}"))
}
