use crate::chart::{SeriesChart, render_to_file};
use crate::cli::commands::{load_dataset, maybe_show, prepare_out_dir};
use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::output_file;

/// Handle the `series` subcommand
pub fn handle(cmd: &Commands, settings: &Settings) -> AppResult<()> {
    if let Commands::Series {
        input,
        events,
        output,
    } = cmd
    {
        let dataset = load_dataset(input, output.range.as_deref(), settings)?;
        let chart = SeriesChart::new(&dataset.records, &settings.events, events)?;

        prepare_out_dir(output)?;
        let stem = format!("{}_{}_graph", dataset.id, chart.slug());
        let path = output_file(&output.out_dir, &stem, output.format.extension());

        let size = (settings.config.chart.width, settings.config.chart.height);
        render_to_file(&chart, &path, output.format, size)?;
        success(format!("{} written to {}", chart.title(), path.display()));

        maybe_show(&path, output, settings);
    }
    Ok(())
}
