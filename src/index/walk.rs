//! Recursive walk that fills an [`InodeIndex`].

use super::{DeviceId, InodeIndex, WarningSink};
use crate::error::{LslocksError, Result};
use std::fs::{self, Metadata};
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options controlling how entries are stat'd during the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Stat symlink targets (true) or the links themselves (false).
    ///
    /// Descent never follows symlinked directories either way.
    pub follow_symlinks: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
        }
    }
}

/// Counters gathered while walking.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories whose listing was read.
    pub directories: u64,
    /// Entries stat'd and added to the index, the root included.
    pub entries: u64,
    /// Entries or directory listings handed to the warning sink.
    pub skipped: u64,
}

impl InodeIndex {
    /// Walk `root` and index every entry beneath it, plus the root itself.
    ///
    /// Entries that cannot be stat'd and directories that cannot be listed
    /// are reported to `sink` and skipped. The only hard failure is a root
    /// that cannot be made absolute.
    pub fn build(
        root: &Path,
        options: &IndexOptions,
        sink: &mut dyn WarningSink,
    ) -> Result<(Self, WalkStats)> {
        let root = absolute_root(root)?;
        let mut index = InodeIndex::new();
        let mut stats = WalkStats::default();
        let mut pending = vec![root.clone()];

        while let Some(dir) = pending.pop() {
            let listing = match fs::read_dir(&dir) {
                Ok(listing) => listing,
                Err(e) => {
                    sink.skipped(&dir, &e);
                    stats.skipped += 1;
                    continue;
                }
            };
            stats.directories += 1;

            for entry in listing {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        sink.skipped(&dir, &e);
                        stats.skipped += 1;
                        continue;
                    }
                };
                let path = entry.path();

                // file_type() does not follow symlinks, so linked directories
                // are indexed but never descended into.
                if let Ok(file_type) = entry.file_type()
                    && file_type.is_dir()
                {
                    pending.push(path.clone());
                }

                index.record(path, options, sink, &mut stats);
            }
        }

        index.record(root.clone(), options, sink, &mut stats);

        debug!(
            root = %root.display(),
            directories = stats.directories,
            entries = stats.entries,
            skipped = stats.skipped,
            inodes = index.len(),
            "indexed subtree"
        );

        Ok((index, stats))
    }

    fn record(
        &mut self,
        path: PathBuf,
        options: &IndexOptions,
        sink: &mut dyn WarningSink,
        stats: &mut WalkStats,
    ) {
        match stat(&path, options.follow_symlinks) {
            Ok(meta) => {
                self.insert(meta.ino(), DeviceId::from_raw(meta.dev()), path);
                stats.entries += 1;
            }
            Err(e) => {
                sink.skipped(&path, &e);
                stats.skipped += 1;
            }
        }
    }
}

fn stat(path: &Path, follow_symlinks: bool) -> io::Result<Metadata> {
    if follow_symlinks {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    }
}

/// Make `root` absolute without resolving symlinks.
///
/// Rebuilding from components drops `.` segments and trailing separators so
/// joined child paths come out clean.
fn absolute_root(root: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(root).map_err(|source| LslocksError::InvalidRoot {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(absolute.components().collect())
}
