//! Exit code constants for the claude-parallel launcher.
//!
//! The launcher owns only two codes of its own:
//! - 0: Success
//! - 1: Launcher failure (missing script, spawn failure, bad config)
//!
//! Any other code the process exits with was produced by the install script
//! and is relayed unchanged.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Launcher failure, or a child status with no usable exit code.
pub const FAILURE: i32 = 1;

/// Convert an exit code into a process exit byte.
///
/// Codes that do not fit in `0..=255` collapse to [`FAILURE`].
pub fn to_exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(FAILURE as u8)
}
