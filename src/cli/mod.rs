//! CLI argument parsing for lslocks.
//!
//! Uses clap derive macros for declarative argument definitions. Any
//! positional count other than one is a usage error that clap reports on
//! stderr before exiting with status 2.

use crate::config::{OutputFormat, Overrides};
use clap::Parser;
use std::path::PathBuf;

/// List processes holding advisory locks on files beneath a directory.
///
/// Prints a `PID<TAB>Path` table with one row per locked path. Hard-linked
/// files appear once per link under the directory.
#[derive(Parser, Debug)]
#[command(name = "lslocks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose subtree is searched for locked files.
    pub directory: PathBuf,

    /// Read this lock table instead of /proc/locks.
    #[arg(long, value_name = "PATH")]
    pub lock_table: Option<PathBuf>,

    /// Load settings from a YAML config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Require the lock's device to match the file's device, not just the inode.
    #[arg(long)]
    pub match_device: bool,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log debug detail to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Config values given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            lock_table: self.lock_table.clone(),
            match_device: self.match_device,
            format: self.format,
        }
    }
}
