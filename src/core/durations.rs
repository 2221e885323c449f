//! Duration Deriver: minute offsets → seven spans covering the whole day.
//!
//! d0 = e1, di = e(i+1) - ei, d6 = 1440 - e6. Every record of a batch must
//! satisfy `sum == 1440` with no negative span; the spans telescope, so an
//! out-of-order day still sums to 1440 and the sign check is what catches it.

use crate::errors::{AppError, AppResult};
use crate::models::{DurationRecord, EVENT_COUNT, NormalizedRecord, SEGMENT_COUNT};
use crate::ui::messages::warning;
use crate::utils::time::MINUTES_PER_DAY;
use chrono::NaiveDate;
use tracing::debug;

/// What to do with records that fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Any failure rejects the whole batch.
    #[default]
    Abort,
    /// Drop failing records, report them, keep the rest.
    SkipAndReport,
}

/// One record that broke the day invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyIssue {
    pub row: usize,
    pub date: NaiveDate,
    pub total: i64,
    pub reason: String,
}

pub fn derive(rec: &NormalizedRecord) -> DurationRecord {
    let e = &rec.offsets;
    let mut spans = [0i64; SEGMENT_COUNT];

    spans[0] = e[0];
    for i in 1..EVENT_COUNT {
        spans[i] = e[i] - e[i - 1];
    }
    spans[SEGMENT_COUNT - 1] = MINUTES_PER_DAY - e[EVENT_COUNT - 1];

    DurationRecord {
        row: rec.row(),
        date: rec.date(),
        spans,
    }
}

pub fn check(rec: &DurationRecord) -> Option<ConsistencyIssue> {
    let total = rec.total();

    let reason = if total != MINUTES_PER_DAY {
        Some(format!("durations must sum to {MINUTES_PER_DAY}"))
    } else {
        rec.spans.iter().position(|&s| s < 0).map(|i| {
            format!(
                "segment {} is negative ({} min): events out of chronological order",
                i, rec.spans[i]
            )
        })
    };

    reason.map(|reason| ConsistencyIssue {
        row: rec.row,
        date: rec.date,
        total,
        reason,
    })
}

/// Validate a batch; the error names the first offending record.
pub fn validate_batch(records: &[DurationRecord]) -> AppResult<()> {
    let issues: Vec<ConsistencyIssue> = records.iter().filter_map(check).collect();
    match issues.first() {
        None => Ok(()),
        Some(first) => Err(consistency_error(first, issues.len())),
    }
}

/// Derive and validate a batch, all or nothing.
pub fn derive_batch(records: &[NormalizedRecord]) -> AppResult<Vec<DurationRecord>> {
    derive_with_policy(records, ValidationPolicy::Abort)
}

pub fn derive_with_policy(
    records: &[NormalizedRecord],
    policy: ValidationPolicy,
) -> AppResult<Vec<DurationRecord>> {
    let derived: Vec<DurationRecord> = records.iter().map(derive).collect();

    match policy {
        ValidationPolicy::Abort => {
            validate_batch(&derived)?;
            debug!(records = derived.len(), "durations derived");
            Ok(derived)
        }
        ValidationPolicy::SkipAndReport => {
            let mut kept = Vec::with_capacity(derived.len());
            let mut issues = Vec::new();

            for d in derived {
                match check(&d) {
                    Some(issue) => issues.push(issue),
                    None => kept.push(d),
                }
            }

            for issue in &issues {
                warning(format!(
                    "Skipping row {} ({}): {} (sum {})",
                    issue.row, issue.date, issue.reason, issue.total
                ));
            }

            if kept.is_empty()
                && let Some(first) = issues.first()
            {
                return Err(consistency_error(first, issues.len()));
            }

            debug!(kept = kept.len(), skipped = issues.len(), "durations derived");
            Ok(kept)
        }
    }
}

fn consistency_error(issue: &ConsistencyIssue, failures: usize) -> AppError {
    AppError::Consistency {
        row: issue.row,
        date: issue.date,
        total: issue.total,
        reason: issue.reason.clone(),
        failures,
    }
}
