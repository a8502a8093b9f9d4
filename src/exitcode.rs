//! Launcher exit codes
//!
//! Generator exit codes are forwarded verbatim; these cover failures of the
//! launcher itself (BSD sysexits.h compatible, plus shell conventions).

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// System error (e.g., can't enter repository root, can't fork)
pub const OSERR: i32 = 71;

/// Configuration error
pub const CONFIG: i32 = 78;

/// Generator found but not executable (shell convention)
pub const NOEXEC: i32 = 126;

/// Generator program not found (shell convention)
pub const NOTFOUND: i32 = 127;
