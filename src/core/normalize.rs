//! Time Normalizer: raw "HH:MM" columns → minute offsets.

use crate::errors::AppResult;
use crate::models::{DailyRecord, EVENT_COUNT, EventSet, NormalizedRecord};
use crate::utils::time::parse_minutes;

/// Normalize one record. A bad cell is reported with its row and column.
pub fn normalize_record(record: DailyRecord, events: &EventSet) -> AppResult<NormalizedRecord> {
    let mut offsets = [0i64; EVENT_COUNT];

    for (i, raw) in record.times.iter().enumerate() {
        offsets[i] = parse_minutes(raw).map_err(|e| e.in_cell(record.row, events.name(i)))?;
    }

    Ok(NormalizedRecord { record, offsets })
}

/// Normalize a whole table, one output per input row, order preserved.
pub fn normalize_all(
    records: Vec<DailyRecord>,
    events: &EventSet,
) -> AppResult<Vec<NormalizedRecord>> {
    records
        .into_iter()
        .map(|r| normalize_record(r, events))
        .collect()
}
