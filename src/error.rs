//! Error types for the lslocks CLI.
//!
//! Uses thiserror for derive macros. Each variant is one class of fatal
//! failure and maps to its own exit code. Per-entry walk failures are not
//! errors here; the indexer reports them to its warning sink and moves on.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lslocks operations.
#[derive(Error, Debug)]
pub enum LslocksError {
    /// Invalid configuration or other user-correctable state.
    #[error("{0}")]
    UserError(String),

    /// The root directory could not be turned into an absolute path.
    #[error("invalid root '{}': {source}", .path.display())]
    InvalidRoot { path: PathBuf, source: io::Error },

    /// The lock table could not be opened.
    #[error("cannot open lock table '{}': {source}", .path.display())]
    LockTableUnavailable { path: PathBuf, source: io::Error },

    /// A lock table line did not match the expected schema.
    #[error("malformed lock table line {line_number} ({reason}): {line:?}")]
    MalformedLine {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Reading the lock table failed part way through.
    #[error("failed to read lock table at line {line_number}: {source}")]
    LockTableRead { line_number: usize, source: io::Error },

    /// Writing results failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl LslocksError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LslocksError::UserError(_) => exit_codes::USER_ERROR,
            LslocksError::InvalidRoot { .. } => exit_codes::USER_ERROR,
            LslocksError::Output(_) => exit_codes::USER_ERROR,
            LslocksError::LockTableUnavailable { .. } => exit_codes::LOCK_TABLE_UNAVAILABLE,
            LslocksError::MalformedLine { .. } => exit_codes::LOCK_TABLE_FORMAT,
            LslocksError::LockTableRead { .. } => exit_codes::LOCK_TABLE_FORMAT,
        }
    }
}

/// Result type alias for lslocks operations.
pub type Result<T> = std::result::Result<T, LslocksError>;
