//! Logging setup.
//!
//! Logs go to stderr so stdout carries nothing but results. `RUST_LOG`, when
//! set, takes precedence over the verbosity flags.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Log verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "lslocks=error",
            Verbosity::Normal => "lslocks=warn",
            Verbosity::Verbose => "lslocks=debug",
        }
    }
}

/// Install the global tracing subscriber.
pub fn setup_logging(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
