use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::core::Dataset;
use crate::errors::AppResult;
use crate::models::NormalizedRecord;
use crate::ui::messages::{header, warning};
use crate::utils::table::{Column, Table};

/// Handle the `preview` subcommand
pub fn handle(cmd: &Commands, settings: &Settings) -> AppResult<()> {
    if let Commands::Preview {
        input,
        rows,
        events,
    } = cmd
    {
        let dataset = Dataset::load(input, settings)?;

        let selected: Vec<usize> = if events.is_empty() {
            vec![0]
        } else {
            events
                .iter()
                .map(|e| settings.events.position(e))
                .collect::<AppResult<_>>()?
        };

        if dataset.is_empty() {
            warning(format!("No rows found in {}", input.display()));
            return Ok(());
        }

        let n = rows.unwrap_or(settings.config.preview_rows);
        header(format!(
            "First {} row(s) of {} with minute columns:",
            n.min(dataset.records.len()),
            dataset.id
        ));
        print!("{}", preview_table(&dataset.records, n, &selected, settings).render());
    }
    Ok(())
}

/// Date column, then `<event>` and `<event>_min` for every selected event.
pub fn preview_table(
    records: &[NormalizedRecord],
    rows: usize,
    selected: &[usize],
    settings: &Settings,
) -> Table {
    let mut columns = vec![Column::new(settings.config.date_column.clone())];
    for &i in selected {
        let name = settings.events.name(i);
        columns.push(Column::new(name));
        columns.push(Column::new(format!("{name}_min")));
    }

    let mut table = Table::new(columns);
    for rec in records.iter().take(rows) {
        let mut cells = vec![rec.record.date_str()];
        for &i in selected {
            cells.push(rec.record.times[i].clone());
            cells.push(rec.offsets[i].to_string());
        }
        table.add_row(cells);
    }

    table
}
