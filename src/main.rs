use bikeshare_stats::cli::{args::Args, commands};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::process;

fn main() {
    // Parse command line arguments; help and version exit here
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => {
            eprintln!("{} {}", "Error:".red().bold(), Args::usage_error(&error));
            eprintln!("{}", Args::command().render_usage());
            process::exit(2);
        }
    };

    match commands::run(args) {
        Ok(_stats) => {
            // Report has already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}
