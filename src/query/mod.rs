//! Top-level lock query.
//!
//! Composes the pipeline: the inode index for the root is built eagerly, then
//! the lock table is opened and joined against it lazily. The returned
//! iterator owns both the index and the open lock table, so dropping it at any
//! point closes the table.


use crate::config::Config;
use crate::correlate::Correlator;
use crate::error::Result;
use crate::index::{InodeIndex, WarningSink};
use crate::lock_table::LockTableReader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Lazy results of a query against an on-disk lock table.
pub type Locks = Correlator<LockTableReader<BufReader<File>>>;

/// Find locks held beneath `root` using the lock table named in `config`.
///
/// # Returns
///
/// * `Ok(Locks)` - A single-pass iterator of `(pid, path)` results
/// * `Err(LslocksError::InvalidRoot)` - The root could not be made absolute
/// * `Err(LslocksError::LockTableUnavailable)` - The lock table could not be opened
pub fn query(root: &Path, config: &Config, sink: &mut dyn WarningSink) -> Result<Locks> {
    let index = build_index(root, config, sink)?;
    let reader = LockTableReader::open(&config.lock_table)?;
    debug!(lock_table = %config.lock_table.display(), "opened lock table");
    Ok(Correlator::new(reader, index, config.device_matching))
}

/// Like [`query`], but reads the lock table from an already open stream.
///
/// `config.lock_table` is ignored.
pub fn query_reader<R: BufRead>(
    root: &Path,
    reader: R,
    config: &Config,
    sink: &mut dyn WarningSink,
) -> Result<Correlator<LockTableReader<R>>> {
    let index = build_index(root, config, sink)?;
    Ok(Correlator::new(
        LockTableReader::new(reader),
        index,
        config.device_matching,
    ))
}

fn build_index(root: &Path, config: &Config, sink: &mut dyn WarningSink) -> Result<InodeIndex> {
    let (index, stats) = InodeIndex::build(root, &config.index_options(), sink)?;
    if stats.skipped > 0 {
        debug!(skipped = stats.skipped, "some entries were not indexed");
    }
    debug!(
        inodes = index.len(),
        paths = index.path_count(),
        matching = ?config.device_matching,
        "index ready"
    );
    Ok(index)
}
