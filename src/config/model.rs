//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a lock query.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the lock table to read (default: `/proc/locks`).
    #[serde(default = "default_lock_table")]
    pub lock_table: PathBuf,

    /// How lock records are matched to indexed paths.
    #[serde(default)]
    pub device_matching: DeviceMatching,

    /// Stat symlink targets while indexing (false stats the links).
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// Output format for results.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_table: default_lock_table(),
            device_matching: DeviceMatching::default(),
            follow_symlinks: default_true(),
            format: OutputFormat::default(),
        }
    }
}
