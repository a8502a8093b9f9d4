//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing the launcher
//! to be tested with mock implementations.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::domain::{GeneratorExit, GeneratorInvocation};

/// Filesystem and process-location abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Path of the running launcher executable.
    fn current_exe(&self) -> io::Result<PathBuf>;

    /// Canonicalize path (resolve symlinks, make absolute).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Change the process working directory.
    fn set_current_dir(&self, path: &Path) -> io::Result<()>;
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Spawn the invocation with inherited standard streams and wait for it.
    fn status(&self, invocation: &GeneratorInvocation) -> io::Result<GeneratorExit>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn current_exe(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn status(&self, invocation: &GeneratorInvocation) -> io::Result<GeneratorExit> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .status()?;

        Ok(exit_from_status(status))
    }
}

fn exit_from_status(status: ExitStatus) -> GeneratorExit {
    if let Some(code) = status.code() {
        return GeneratorExit::Code(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return GeneratorExit::Signal(signal);
        }
    }

    GeneratorExit::Code(1)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn given_wait_status_with_code_when_mapping_then_returns_code() {
        // raw wait status: exit code lives in bits 8..16
        let status = ExitStatus::from_raw(3 << 8);
        assert_eq!(exit_from_status(status), GeneratorExit::Code(3));
    }

    #[test]
    fn given_wait_status_with_signal_when_mapping_then_returns_signal() {
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_from_status(status), GeneratorExit::Signal(9));
    }
}
