//! Kernel lock table parsing.
//!
//! This module turns the line-oriented lock table (`/proc/locks` on Linux)
//! into a lazy stream of [`LockRecord`]s. Each line looks like:
//!
//! ```text
//! 1: FLOCK  ADVISORY  WRITE 1234 08:01:123456 0 EOF
//! ```
//!
//! Fields are: lock id, class, mode, kind, holder pid, `major:minor:inode`,
//! range start and range end. Only the pid and the composite file field are
//! kept; the rest are checked for shape and dropped.
//!
//! A line that does not fit the schema is fatal for the whole read. The table
//! is a single kernel snapshot and a partially understood snapshot would give
//! misleading answers.

mod parser;
mod reader;


pub use parser::parse_line;
pub use reader::LockTableReader;

use crate::index::DeviceId;

/// Process id of a lock holder.
///
/// Signed because the kernel reports `-1` for open file description locks,
/// which belong to no single process.
pub type Pid = i32;

/// One row of the lock table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockRecord {
    /// Process holding the lock.
    pub pid: Pid,
    /// Device the locked inode lives on.
    pub device: DeviceId,
    /// Inode number of the locked file.
    pub inode: u64,
}
