//! Exit code constants for the lslocks CLI.
//!
//! - 0: Success (including an empty result table)
//! - 1: User error (bad config, invalid root, output failure)
//! - 2: Usage error (wrong arguments; this is the code clap exits with)
//! - 3: Lock table could not be opened
//! - 4: Lock table was malformed or could not be read

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid configuration, unusable root path, or output failure.
pub const USER_ERROR: i32 = 1;

/// Usage error: wrong number of arguments or unknown flags.
pub const USAGE_ERROR: i32 = 2;

/// The lock table source could not be opened.
pub const LOCK_TABLE_UNAVAILABLE: i32 = 3;

/// The lock table contained a malformed line or failed mid-read.
pub const LOCK_TABLE_FORMAT: i32 = 4;
