//! Command-line argument definitions for the bikeshare statistics processor
//!
//! A single positional argument names the input CSV file; everything else is
//! an optional flag.

use crate::config::{Config, OutputFormat, SortOrder};
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::error::StatsError;
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::path::PathBuf;

/// CLI arguments for the bikeshare statistics processor
///
/// Reads a `station_id,bike_id,arrival,departure` CSV file and reports the
/// number and average duration of completed trips per bike and per station.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bikeshare-stats",
    version,
    about = "Report average bike trip durations per bike and per station",
    long_about = "Validates a bike rental station event CSV file (station_id,bike_id,arrival,departure, \
                  no header row, timestamps as YYYYMMDDThh:mm:ss) and reports, per bike and per station, \
                  the total duration, number and average duration of completed trips. Any invalid row \
                  aborts the run without producing a report."
)]
pub struct Args {
    /// Path to the station events CSV file
    #[arg(value_name = "CSV_FILE", help = "Path to the station events CSV file")]
    pub input_path: PathBuf,

    /// Ordering used to pair events and list report entries
    ///
    /// `numeric` compares ids as numbers and timestamps chronologically.
    /// `textual` compares the raw field text, so station 10 sorts before station 2.
    #[arg(
        long = "sort-order",
        value_enum,
        default_value = "numeric",
        help = "Ordering used to pair events and list report entries"
    )]
    pub sort_order: SortOrder,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors on stderr
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the appropriate log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn to_config(&self) -> Config {
        Config::new()
            .with_sort_order(self.sort_order)
            .with_output_format(self.output_format)
    }

    /// Map a clap parse failure onto the crate's usage error
    ///
    /// Only a surplus positional argument gets the one-file message; other
    /// failures keep clap's own description.
    pub fn usage_error(error: &clap::Error) -> StatsError {
        let message = match error.kind() {
            ErrorKind::MissingRequiredArgument => {
                "a path to the input CSV file is required".to_string()
            }
            ErrorKind::TooManyValues => "exactly one input CSV file is accepted".to_string(),
            ErrorKind::UnknownArgument if is_extra_positional(error) => {
                "exactly one input CSV file is accepted".to_string()
            }
            _ => clap_message(error),
        };

        StatsError::usage(message)
    }
}

fn is_extra_positional(error: &clap::Error) -> bool {
    matches!(
        error.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if !arg.starts_with('-')
    )
}

/// First line of clap's rendered error, without its `error: ` prefix
fn clap_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or("invalid arguments");
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
