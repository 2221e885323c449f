use crate::cli::parser::Commands;
use crate::config::Settings;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `config` subcommand.
///
/// Validation already ran at startup, so `--check` only has to report it.
pub fn handle(cmd: &Commands, settings: &Settings) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Effective configuration:\n");
            println!("{}", settings.config.to_yaml()?);
        }

        if *check || !*print_config {
            success(format!(
                "Configuration OK: {} events ({}), {} segment styles",
                settings.events.names().len(),
                settings.events.names().join(", "),
                settings.palette.iter().count()
            ));
        }
    }
    Ok(())
}
