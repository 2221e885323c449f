//! Unified application error type.
//! Every stage of the pipeline (loader, normalizer, deriver, chart, export)
//! returns AppError so that failures surface the same way at the CLI boundary.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Missing column in input table: {0}")]
    MissingColumn(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Row {row}, column '{column}': {source}")]
    InvalidCell {
        row: usize,
        column: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Unknown event '{0}' (not one of the configured events)")]
    UnknownEvent(String),

    // ---------------------------
    // Consistency errors
    // ---------------------------
    #[error(
        "Inconsistent day at row {row} ({date}): {reason} (sum {total}); {failures} bad record(s)"
    )]
    Consistency {
        row: usize,
        date: NaiveDate,
        total: i64,
        reason: String,
        failures: usize,
    },

    // ---------------------------
    // Rendering errors
    // ---------------------------
    #[error("Nothing to render: the dataset is empty")]
    EmptyDataset,

    #[error("Rendering error: {0}")]
    Render(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Wrap a cell-level failure with the row and column it came from.
    pub fn in_cell(self, row: usize, column: &str) -> Self {
        AppError::InvalidCell {
            row,
            column: column.to_string(),
            source: Box::new(self),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
