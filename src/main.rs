//! mdpost - Convert markdown blog posts with LaTeX math into standalone HTML.

mod cli;
mod config;
mod error;
mod logger;
mod markdown;
mod math;
mod pipeline;
mod template;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser, error::ErrorKind};
use cli::{Cli, Commands};
use config::PostConfig;

/// Exit code for usage errors and failed conversions.
const EXIT_FAILURE: u8 = 1;
/// Exit code when the input file does not exist.
const EXIT_NOT_FOUND: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(&err),
    };

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Convert { args } => {
            let config = PostConfig::load(cli)?;
            cli::convert::convert_post(args, &config)
        }
        Commands::Title { input } => cli::title::print_title(input),
    }
}

/// Print clap's message to stdout; help and version are not failures.
fn usage_exit(err: &clap::Error) -> ExitCode {
    print!("{}", err.render());
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(EXIT_FAILURE),
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<error::Error>() {
        Some(error::Error::FileNotFound(_)) => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}
