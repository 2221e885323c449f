//! Table Loader: reads the delimited input into daily records.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, EVENT_COUNT, EventSet};
use crate::utils::date::parse_date;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Header positions of the columns the pipeline needs.
struct ColumnMap {
    date: usize,
    events: [usize; EVENT_COUNT],
}

impl ColumnMap {
    fn resolve(headers: &StringRecord, date_column: &str, events: &EventSet) -> AppResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| AppError::MissingColumn(name.to_string()))
        };

        let date = find(date_column)?;
        let mut idx = [0usize; EVENT_COUNT];
        for (i, name) in events.names().iter().enumerate() {
            idx[i] = find(name)?;
        }

        Ok(Self { date, events: idx })
    }
}

pub fn load_table(path: &Path, cfg: &Config, events: &EventSet) -> AppResult<Vec<DailyRecord>> {
    debug!(path = %path.display(), "loading table");
    let reader = ReaderBuilder::new()
        .delimiter(cfg.delimiter as u8)
        .trim(Trim::All)
        .from_path(path)?;
    read_records(reader, cfg, events)
}

/// Same as `load_table`, from any reader (used for in-memory input).
pub fn load_from_reader<R: Read>(
    input: R,
    cfg: &Config,
    events: &EventSet,
) -> AppResult<Vec<DailyRecord>> {
    let reader = ReaderBuilder::new()
        .delimiter(cfg.delimiter as u8)
        .trim(Trim::All)
        .from_reader(input);
    read_records(reader, cfg, events)
}

fn read_records<R: Read>(
    mut reader: csv::Reader<R>,
    cfg: &Config,
    events: &EventSet,
) -> AppResult<Vec<DailyRecord>> {
    let headers = reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers, &cfg.date_column, events)?;

    let mut out = Vec::new();

    for (i, rec) in reader.records().enumerate() {
        let rec = rec?;
        let row = i + 1;

        let cell = |idx: usize, name: &str| -> AppResult<String> {
            rec.get(idx)
                .map(str::to_string)
                .ok_or_else(|| AppError::MissingColumn(format!("{name} (row {row})")))
        };

        let raw_date = cell(columns.date, &cfg.date_column)?;
        let date = parse_date(&raw_date, &cfg.date_format).ok_or_else(|| {
            AppError::InvalidDate(format!(
                "row {row}: '{raw_date}' does not match '{}'",
                cfg.date_format
            ))
        })?;

        let mut times: [String; EVENT_COUNT] = Default::default();
        for (slot, (&idx, name)) in times
            .iter_mut()
            .zip(columns.events.iter().zip(events.names().iter()))
        {
            *slot = cell(idx, name)?;
        }

        out.push(DailyRecord { row, date, times });
    }

    debug!(rows = out.len(), "table loaded");
    Ok(out)
}
