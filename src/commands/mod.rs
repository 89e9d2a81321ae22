//! Command implementation for lslocks.
//!
//! Resolves the effective config, runs the query, and prints the results.
//! Results are gathered in full before anything is written, so a fatal
//! lock table error never leaves a partial table on stdout.


use crate::cli::Cli;
use crate::config::Config;
use crate::correlate::LockResult;
use crate::error::Result;
use crate::index::{TracingSink, WarningSink};
use crate::output;
use crate::query;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Run the command described by `cli`, printing to stdout.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cmd_list(&cli.directory, &config, &mut TracingSink, &mut out)
}

/// Config file values (if any) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let base = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    base.apply_overrides(cli.overrides())
}

/// List locks held beneath `root` and write them to `out`.
fn cmd_list<W: Write>(
    root: &Path,
    config: &Config,
    sink: &mut dyn WarningSink,
    out: &mut W,
) -> Result<()> {
    let results: Vec<LockResult> = query::query(root, config, sink)?.collect::<Result<_>>()?;
    debug!(results = results.len(), "query complete");
    output::write_results(out, &results, config.format)
}
