use crate::chart::{StackedChart, render_to_file};
use crate::cli::commands::{load_dataset, maybe_show, prepare_out_dir};
use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::core::ValidationPolicy;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::output_file;

/// Handle the `year` subcommand
pub fn handle(cmd: &Commands, settings: &Settings) -> AppResult<()> {
    if let Commands::Year {
        input,
        output,
        skip_invalid,
    } = cmd
    {
        let dataset = load_dataset(input, output.range.as_deref(), settings)?;
        let durations = dataset.durations(policy(*skip_invalid))?;

        let title = format!("{} - Daily Durations Between Prayers", dataset.id);
        let chart = StackedChart::new(title, &durations, &settings.palette)?;

        prepare_out_dir(output)?;
        let stem = format!("{}{}", dataset.id, settings.config.chart.output_suffix);
        let path = output_file(&output.out_dir, &stem, output.format.extension());

        let size = (settings.config.chart.width, settings.config.chart.height);
        render_to_file(&chart, &path, output.format, size)?;
        success(format!(
            "Year graph ({} days) written to {}",
            durations.len(),
            path.display()
        ));

        maybe_show(&path, output, settings);
    }
    Ok(())
}

pub(crate) fn policy(skip_invalid: bool) -> ValidationPolicy {
    if skip_invalid {
        ValidationPolicy::SkipAndReport
    } else {
        ValidationPolicy::Abort
    }
}
