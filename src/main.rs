//! lslocks: report which processes hold advisory locks beneath a directory.
//!
//! This is the main entry point for the `lslocks` CLI. It parses arguments,
//! sets up logging, runs the query, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod correlate;
pub mod error;
pub mod exit_codes;
pub mod index;
pub mod lock_table;
pub mod logging;
pub mod output;
pub mod query;

#[cfg(test)]
mod test_support;

use cli::Cli;
use logging::Verbosity;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::setup_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
