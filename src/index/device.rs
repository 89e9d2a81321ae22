//! Device identifiers as the kernel prints them in the lock table.

use std::fmt;

/// A (major, minor) device number pair.
///
/// Inode numbers are only unique within one device, so this is the scope an
/// inode number lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId {
    pub major: u32,
    pub minor: u32,
}

impl DeviceId {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Split a raw `st_dev` value into its major and minor parts.
    pub fn from_raw(dev: u64) -> Self {
        Self {
            major: libc::major(dev as libc::dev_t) as u32,
            minor: libc::minor(dev as libc::dev_t) as u32,
        }
    }
}

/// Formats the same way `/proc/locks` does (`%02x:%02x`).
impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}:{:02x}", self.major, self.minor)
    }
}
