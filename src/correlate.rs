//! Join of lock table records against an inode index.
//!
//! The correlator pulls records from the lock table on demand and fans each
//! matching record out into one [`LockResult`] per indexed path. Records for
//! inodes outside the index belong to files outside the queried subtree and
//! are dropped.

use crate::config::DeviceMatching;
use crate::error::Result;
use crate::index::InodeIndex;
use crate::lock_table::{LockRecord, Pid};
use std::path::PathBuf;
use std::vec;

/// A lock holder paired with one locked path beneath the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LockResult {
    pub pid: Pid,
    pub path: PathBuf,
}

/// Iterator adapter joining lock records against an owned [`InodeIndex`].
///
/// A reader error is passed through once and ends the iteration.
#[derive(Debug)]
pub struct Correlator<I> {
    records: I,
    index: InodeIndex,
    matching: DeviceMatching,
    holder: Pid,
    pending: vec::IntoIter<PathBuf>,
    done: bool,
}

impl<I> Correlator<I>
where
    I: Iterator<Item = Result<LockRecord>>,
{
    pub fn new(records: I, index: InodeIndex, matching: DeviceMatching) -> Self {
        Self {
            records,
            index,
            matching,
            holder: 0,
            pending: Vec::new().into_iter(),
            done: false,
        }
    }

    /// The index this correlator joins against.
    #[cfg(test)]
    pub fn index(&self) -> &InodeIndex {
        &self.index
    }

    /// Paths under the root that `record` refers to.
    fn matching_paths(&self, record: &LockRecord) -> Vec<PathBuf> {
        self.index
            .lookup(record.inode)
            .filter(|(_, device)| match self.matching {
                DeviceMatching::Inode => true,
                DeviceMatching::Device => *device == record.device,
            })
            .map(|(path, _)| path.to_path_buf())
            .collect()
    }
}

impl<I> Iterator for Correlator<I>
where
    I: Iterator<Item = Result<LockRecord>>,
{
    type Item = Result<LockResult>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(path) = self.pending.next() {
                return Some(Ok(LockResult {
                    pid: self.holder,
                    path,
                }));
            }
            if self.done {
                return None;
            }

            let record = match self.records.next() {
                Some(Ok(record)) => record,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            self.holder = record.pid;
            self.pending = self.matching_paths(&record).into_iter();
        }
    }
}
