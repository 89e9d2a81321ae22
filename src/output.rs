//! Rendering of query results.

use crate::config::OutputFormat;
use crate::correlate::LockResult;
use crate::error::{LslocksError, Result};
use crate::lock_table::Pid;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use tracing::warn;

/// Header line of the table format.
pub const TABLE_HEADER: &str = "PID\tPath";

/// One JSON Lines row. JSON strings are UTF-8, so other paths go out lossy.
#[derive(Serialize)]
struct JsonRow<'a> {
    pid: Pid,
    path: Cow<'a, str>,
}

/// Write `results` to `out` in the requested format.
///
/// The table format always prints its header, even with no results, and
/// writes paths as their raw bytes.
pub fn write_results<W: Write>(out: &mut W, results: &[LockResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", TABLE_HEADER)?;
            for result in results {
                write!(out, "{}\t", result.pid)?;
                out.write_all(result.path.as_os_str().as_bytes())?;
                writeln!(out)?;
            }
        }
        OutputFormat::Json => {
            for result in results {
                let path = result.path.to_string_lossy();
                if let Cow::Owned(_) = path {
                    warn!(path = %path, "path is not valid UTF-8, writing it lossily");
                }
                let row = JsonRow {
                    pid: result.pid,
                    path,
                };
                serde_json::to_writer(&mut *out, &row).map_err(|e| {
                    LslocksError::UserError(format!("failed to serialize result: {}", e))
                })?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
