//! Single-line lock table parsing.

use super::{LockRecord, Pid};
use crate::error::{LslocksError, Result};
use crate::index::DeviceId;

/// Number of whitespace-separated fields in a lock table line.
const FIELD_COUNT: usize = 8;

/// Parse one non-empty lock table line.
///
/// `line_number` is 1-based and only used for error reporting.
///
/// # Returns
///
/// * `Ok(LockRecord)` - The holder pid and file identity of the lock
/// * `Err(LslocksError::MalformedLine)` - Wrong field count or a field with
///   the wrong shape
pub fn parse_line(line: &str, line_number: usize) -> Result<LockRecord> {
    let malformed = |reason: String| LslocksError::MalformedLine {
        line_number,
        line: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [lock_id, _class, _mode, _kind, pid, file_id, start, end] = fields[..] else {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    };

    lock_id
        .strip_suffix(':')
        .and_then(|id| id.parse::<u64>().ok())
        .ok_or_else(|| malformed(format!("invalid lock id '{}'", lock_id)))?;

    let pid: Pid = pid
        .parse()
        .map_err(|_| malformed(format!("invalid pid '{}'", pid)))?;

    let (device, inode) =
        parse_file_id(file_id).ok_or_else(|| malformed(format!("invalid file id '{}'", file_id)))?;

    start
        .parse::<u64>()
        .map_err(|_| malformed(format!("invalid range start '{}'", start)))?;
    if end != "EOF" {
        end.parse::<u64>()
            .map_err(|_| malformed(format!("invalid range end '{}'", end)))?;
    }

    Ok(LockRecord { pid, device, inode })
}

/// Split `major:minor:inode`. Major and minor are hex, the inode is decimal.
fn parse_file_id(field: &str) -> Option<(DeviceId, u64)> {
    let mut parts = field.split(':');
    let major = u32::from_str_radix(parts.next()?, 16).ok()?;
    let minor = u32::from_str_radix(parts.next()?, 16).ok()?;
    let inode = parts.next()?.parse::<u64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((DeviceId::new(major, minor), inode))
}
