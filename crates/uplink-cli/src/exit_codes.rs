//! Process exit codes for the `uplink` binary.

/// Report accepted and every stage finished.
pub const SUCCESS: i32 = 0;

/// Report rejected or an upload stage failed.
pub const UPLOAD_FAILED: i32 = 1;

/// Unreadable report, bad invocation, or unreachable service.
pub const CONFIG_ERROR: i32 = 2;
