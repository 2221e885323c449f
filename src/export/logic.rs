// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DurationExport;
use crate::export::xlsx::export_xlsx;
use crate::models::DurationRecord;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the derived duration table.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        durations: &[DurationRecord],
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        if durations.is_empty() {
            return Err(AppError::EmptyDataset);
        }

        if let Some(parent) = file.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "output directory does not exist: {}",
                parent.display()
            )));
        }

        if !format.matches_extension(file) {
            warning(format!(
                "'{}' does not end in .{}; writing {} anyway",
                file.display(),
                format.as_str(),
                format.as_str().to_uppercase()
            ));
        }

        ensure_writable(file, force)?;

        let rows: Vec<DurationExport> = durations.iter().map(DurationExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, file),
            ExportFormat::Json => export_json(&rows, file),
            ExportFormat::Xlsx => export_xlsx(&rows, file),
        }
    }
}
