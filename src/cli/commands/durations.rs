use crate::cli::commands::load_dataset;
use crate::cli::commands::year::policy;
use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use tracing::debug;

/// Handle the `durations` subcommand
pub fn handle(cmd: &Commands, settings: &Settings) -> AppResult<()> {
    if let Commands::Durations {
        input,
        format,
        file,
        range,
        skip_invalid,
        force,
    } = cmd
    {
        let dataset = load_dataset(input, range.as_deref(), settings)?;
        let durations = dataset.durations(policy(*skip_invalid))?;

        debug!(format = format.as_str(), rows = durations.len(), "exporting durations");
        ExportLogic::export(&durations, *format, file, *force)?;
    }
    Ok(())
}
