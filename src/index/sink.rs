//! Warning sinks for entries the indexer has to skip.

use std::io;
use std::path::Path;
#[cfg(test)]
use std::path::PathBuf;
use tracing::warn;

/// Receives a warning for every entry the walk could not stat or list.
///
/// The indexer never fails on a single entry; it hands the failure to the sink
/// and carries on.
pub trait WarningSink {
    fn skipped(&mut self, path: &Path, err: &io::Error);
}

/// Forwards skipped entries to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn skipped(&mut self, path: &Path, err: &io::Error) {
        warn!(path = %path.display(), error = %err, "skipping entry");
    }
}

/// Collects skipped entries in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub skipped: Vec<(PathBuf, io::ErrorKind)>,
}

#[cfg(test)]
impl WarningSink for CollectingSink {
    fn skipped(&mut self, path: &Path, err: &io::Error) {
        self.skipped.push((path.to_path_buf(), err.kind()));
    }
}
