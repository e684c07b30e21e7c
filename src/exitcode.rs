//! Exit codes
//!
//! Usage errors exit with 1 rather than sysexits' 64.

/// Successful termination
pub const OK: i32 = 0;

/// Wrong argument count or otherwise malformed command line
pub const USAGE: i32 = 1;

/// Input/output error (stdout closed or unwritable)
pub const IOERR: i32 = 74;
