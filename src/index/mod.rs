//! Inode index for a directory subtree.
//!
//! The index maps every inode number found beneath a root directory to the
//! set of paths that resolved to it when stat'd. Hard links land in the same
//! set. The index is a snapshot: it is built once per query and can go stale
//! if the filesystem changes underneath it.

mod device;
mod sink;
mod walk;

#[cfg(test)]
mod tests;

pub use device::DeviceId;
pub use sink::{TracingSink, WarningSink};
pub use walk::{IndexOptions, WalkStats};

#[cfg(test)]
pub use sink::CollectingSink;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Mapping from inode number to the indexed paths sharing it.
///
/// Each path remembers the device its stat reported, so lookups can be
/// narrowed to a single device when needed.
#[derive(Debug, Default, Clone)]
pub struct InodeIndex {
    entries: HashMap<u64, BTreeMap<PathBuf, DeviceId>>,
}

impl InodeIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `path` resolved to `inode` on `device`.
    pub fn insert(&mut self, inode: u64, device: DeviceId, path: PathBuf) {
        self.entries.entry(inode).or_default().insert(path, device);
    }

    /// Paths indexed under `inode`, with the device each was found on.
    ///
    /// Yields nothing if the inode is not in the index.
    pub fn lookup(&self, inode: u64) -> impl Iterator<Item = (&Path, DeviceId)> {
        self.entries
            .get(&inode)
            .into_iter()
            .flat_map(|paths| paths.iter().map(|(path, dev)| (path.as_path(), *dev)))
    }

    #[cfg(test)]
    pub fn contains(&self, inode: u64) -> bool {
        self.entries.contains_key(&inode)
    }

    /// Number of distinct inodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of indexed paths across all inodes.
    pub fn path_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }
}
