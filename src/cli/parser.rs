use crate::chart::ChartFormat;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for prayergraph
#[derive(Parser)]
#[command(
    name = "prayergraph",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a yearly prayer-time table into minute offsets, daily durations and charts",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (YAML); defaults to ~/.prayergraph/prayergraph.conf if present
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Print pipeline diagnostics on stderr
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the first rows of the table with their minute offsets
    Preview {
        /// Input table (CSV)
        input: PathBuf,

        /// Number of rows to print (default from config)
        #[arg(long = "rows", short = 'n')]
        rows: Option<usize>,

        /// Event column(s) to show; defaults to the first event
        #[arg(long = "event", short = 'e')]
        events: Vec<String>,
    },

    /// Line chart of one or more events' time of day across the dataset
    Series {
        /// Input table (CSV)
        input: PathBuf,

        /// Event column(s) to plot, one line each
        #[arg(long = "event", short = 'e', required = true)]
        events: Vec<String>,

        #[command(flatten)]
        output: ChartOutput,
    },

    /// Stacked bars of the seven daily durations, one bar per day
    Year {
        /// Input table (CSV)
        input: PathBuf,

        #[command(flatten)]
        output: ChartOutput,

        /// Drop and report inconsistent days instead of aborting
        #[arg(long = "skip-invalid")]
        skip_invalid: bool,
    },

    /// Export the derived duration table
    Durations {
        /// Input table (CSV)
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Output file
        #[arg(long)]
        file: PathBuf,

        /// Filter by period (YYYY, YYYY-MM, YYYY-MM-DD, ranges start:end, or all)
        #[arg(long, short)]
        range: Option<String>,

        /// Drop and report inconsistent days instead of aborting
        #[arg(long = "skip-invalid")]
        skip_invalid: bool,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Show or check the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration and report")]
        check: bool,
    },
}

/// Options shared by the chart commands.
#[derive(clap::Args, Clone, Debug)]
pub struct ChartOutput {
    /// Directory for the image file
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Image format
    #[arg(long, value_enum, default_value_t = ChartFormat::Png)]
    pub format: ChartFormat,

    /// Filter by period (YYYY, YYYY-MM, YYYY-MM-DD, ranges start:end, or all)
    #[arg(long, short)]
    pub range: Option<String>,

    /// Only write the file, do not open it
    #[arg(long = "no-show")]
    pub no_show: bool,
}
