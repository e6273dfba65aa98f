use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Travel planner: builds a day-by-day itinerary, checks it against a budget,
/// and proposes cheaper alternatives when it does not fit.
#[derive(Parser, Debug)]
#[command(name = "travel_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a YAML config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan one trip from command-line arguments.
    Plan {
        /// Where the trip goes.
        #[arg(short, long)]
        destination: String,

        /// Trip length in days.
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        days: i64,

        /// Budget ceiling for the whole trip.
        #[arg(short, long, allow_negative_numbers = true)]
        budget: f64,

        /// Date of day 1 (YYYY-MM-DD). Defaults to today plus the configured lead time.
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Save the plan as JSON under the default file name.
        #[arg(long)]
        save: bool,

        /// Save the plan as JSON to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the alternative scenarios to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Plan trips through interactive prompts.
    Interactive,

    /// Print a plan saved earlier.
    Show {
        /// Path to a saved plan JSON file.
        file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full text report.
    Text,
    /// Itinerary table only.
    Markdown,
    /// JSON document.
    Json,
}
