pub mod config;
pub mod durations;
pub mod preview;
pub mod series;
pub mod year;

use crate::chart::display;
use crate::cli::parser::ChartOutput;
use crate::config::Settings;
use crate::core::Dataset;
use crate::core::period::parse_period;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Load the input and apply the optional --range filter.
pub(crate) fn load_dataset(
    input: &Path,
    range: Option<&str>,
    settings: &Settings,
) -> AppResult<Dataset> {
    let bounds = parse_period(range)?;
    let dataset = Dataset::load(input, settings)?.within(bounds);
    if dataset.is_empty() {
        return Err(AppError::EmptyDataset);
    }
    Ok(dataset)
}

pub(crate) fn prepare_out_dir(output: &ChartOutput) -> AppResult<()> {
    fs::create_dir_all(&output.out_dir)?;
    Ok(())
}

/// Open the finished chart unless disabled on the command line or in config.
pub(crate) fn maybe_show(path: &Path, output: &ChartOutput, settings: &Settings) {
    if !output.no_show && settings.config.chart.show {
        display::show(path);
    }
}
