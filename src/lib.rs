//! prayergraph library root.
//! Exposes the CLI parser, the high-level run() function, and the pipeline
//! modules: loader and normalizer, duration deriver, chart renderer, export.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, Settings};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, settings: &Settings) -> AppResult<()> {
    match &cli.command {
        Commands::Preview { .. } => cli::commands::preview::handle(&cli.command, settings),
        Commands::Series { .. } => cli::commands::series::handle(&cli.command, settings),
        Commands::Year { .. } => cli::commands::year::handle(&cli.command, settings),
        Commands::Durations { .. } => cli::commands::durations::handle(&cli.command, settings),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, settings),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    // config is loaded and validated once, before any input is read
    let settings = Config::load(cli.config.as_deref())?.validate()?;

    dispatch(&cli, &settings)
}
