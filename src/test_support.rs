use crate::index::DeviceId;
use std::fs::File;
use std::os::fd::AsRawFd;
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use tempfile::TempDir;

/// Path of the live kernel lock table.
pub(crate) const PROC_LOCKS: &str = "/proc/locks";

pub(crate) fn proc_locks_available() -> bool {
    Path::new(PROC_LOCKS).is_file()
}

pub(crate) fn create_test_tree() -> TempDir {
    TempDir::new().unwrap()
}

/// Create an empty file under `dir` and return its path.
pub(crate) fn touch(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"").unwrap();
    path
}

/// Inode and device of `path`, following symlinks.
pub(crate) fn file_id(path: &Path) -> (DeviceId, u64) {
    let meta = std::fs::metadata(path).unwrap();
    (DeviceId::from_raw(meta.dev()), meta.ino())
}

/// A `/proc/locks` style line for a lock held by `pid` on `device`/`inode`.
pub(crate) fn lock_line(lock_id: u32, pid: i32, device: DeviceId, inode: u64) -> String {
    format!("{lock_id}: FLOCK  ADVISORY  WRITE {pid} {device}:{inode} 0 EOF")
}

/// A lock table line describing a lock held by `pid` on the file at `path`.
pub(crate) fn lock_line_for(lock_id: u32, pid: i32, path: &Path) -> String {
    let (device, inode) = file_id(path);
    lock_line(lock_id, pid, device, inode)
}

/// Join lines into a table with a trailing newline, like the kernel writes it.
pub(crate) fn lock_table(lines: &[String]) -> String {
    let mut table = lines.join("\n");
    table.push('\n');
    table
}

/// Holds an exclusive `flock(2)` on a file or directory until dropped.
pub(crate) struct HeldLock {
    _file: File,
}

pub(crate) fn hold_flock(path: &Path) -> HeldLock {
    let file = File::open(path).unwrap_or_else(|e| panic!("open {}: {}", path.display(), e));
    // SAFETY: the descriptor is owned by `file` and stays open for the call.
    let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    assert_eq!(
        rc,
        0,
        "flock {} failed: {}",
        path.display(),
        std::io::Error::last_os_error()
    );
    HeldLock { _file: file }
}
