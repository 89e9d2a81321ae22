//! Configuration types and defaults for lslocks.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the kernel lock table on Linux.
pub const DEFAULT_LOCK_TABLE: &str = "/proc/locks";

/// How lock records are matched against indexed paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeviceMatching {
    /// Match on inode number alone (default).
    ///
    /// Overlay and btrfs subvolume paths stat with a different device than
    /// the lock table reports, so this is the mode that finds their locks.
    #[default]
    Inode,
    /// Also require the lock's major:minor to equal the path's device.
    Device,
}

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `PID\tPath` header followed by tab-separated rows.
    #[default]
    Table,
    /// One JSON object per line, no header.
    Json,
}

pub fn default_lock_table() -> PathBuf {
    PathBuf::from(DEFAULT_LOCK_TABLE)
}

pub fn default_true() -> bool {
    true
}
