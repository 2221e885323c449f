use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), format).ok()
}

/// First day of every calendar month touched by `first..=last`.
pub fn month_starts(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut y = first.year();
    let mut m = first.month();

    while let Some(d) = NaiveDate::from_ymd_opt(y, m, 1) {
        if d > last {
            break;
        }
        out.push(d);
        if m == 12 {
            y += 1;
            m = 1;
        } else {
            m += 1;
        }
    }

    out
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
