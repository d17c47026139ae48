//! Command implementation for the bikeshare statistics CLI
//!
//! Sets up logging, runs the pipeline once over the input file and writes
//! the report to stdout. Logs go to stderr so stdout carries only the report.

use crate::app::services::pipeline::{ActivityPipeline, ProcessingStats};
use crate::cli::args::Args;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging
/// 2. Run the pipeline over the input file
/// 3. Write the report to stdout
pub fn run(args: Args) -> Result<ProcessingStats> {
    setup_logging(&args);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute(&args, &mut handle)
}

/// Run the pipeline and write the report to `writer`
///
/// Nothing is written when any stage fails.
pub fn execute<W: Write>(args: &Args, writer: &mut W) -> Result<ProcessingStats> {
    let start_time = Instant::now();
    info!("Starting bikeshare stats");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    let pipeline = ActivityPipeline::new(config.clone());

    let result = pipeline
        .run_path(&args.input_path)
        .with_context(|| format!("Failed to process {}", args.input_path.display()))?;

    result
        .report
        .write_to(config.output_format, writer)
        .context("Failed to write report")?;
    writer.flush().context("Failed to flush report")?;

    info!("Finished in {:?}", start_time.elapsed());
    Ok(result.stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bikeshare_stats={}", log_level)));

    let initialised = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(io::stderr),
            )
            .try_init()
    };

    if initialised.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
