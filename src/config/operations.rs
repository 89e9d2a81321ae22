//! Config loading, validation, and command-line overrides.

use super::model::Config;
use super::types::{DeviceMatching, OutputFormat};
use crate::error::{LslocksError, Result};
use crate::index::IndexOptions;
use std::path::{Path, PathBuf};

/// Values given on the command line, each overriding the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub lock_table: Option<PathBuf>,
    pub match_device: bool,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(LslocksError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LslocksError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| LslocksError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.lock_table.as_os_str().is_empty() {
            return Err(LslocksError::UserError(
                "config validation failed: lock_table must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Layer command-line values over this config.
    pub fn apply_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(lock_table) = overrides.lock_table {
            self.lock_table = lock_table;
        }
        if overrides.match_device {
            self.device_matching = DeviceMatching::Device;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self.validate()?;
        Ok(self)
    }

    /// Walk options derived from this config.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            follow_symlinks: self.follow_symlinks,
        }
    }
}
