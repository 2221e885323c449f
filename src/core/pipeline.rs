//! Pipeline entry point: load → normalize, with the input path passed in.

use crate::config::Settings;
use crate::core::durations::{ValidationPolicy, derive_with_policy};
use crate::core::loader::load_table;
use crate::core::normalize::normalize_all;
use crate::core::period::Bounds;
use crate::errors::AppResult;
use crate::models::{DurationRecord, NormalizedRecord};
use crate::utils::path::dataset_id;
use std::path::Path;
use tracing::info;

/// A loaded and normalized input table.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub id: String,
    pub records: Vec<NormalizedRecord>,
}

impl Dataset {
    pub fn load(path: &Path, settings: &Settings) -> AppResult<Self> {
        let raw = load_table(path, &settings.config, &settings.events)?;
        let records = normalize_all(raw, &settings.events)?;

        let id = dataset_id(path);
        info!(dataset = %id, rows = records.len(), "dataset normalized");

        Ok(Self { id, records })
    }

    /// Keep only the rows inside `bounds` (inclusive).
    pub fn within(mut self, bounds: Option<Bounds>) -> Self {
        if let Some((start, end)) = bounds {
            self.records.retain(|r| r.date() >= start && r.date() <= end);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn durations(&self, policy: ValidationPolicy) -> AppResult<Vec<DurationRecord>> {
        derive_with_policy(&self.records, policy)
    }
}
