//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the launcher's layout rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("launcher has no containing folder: {0}")]
    NoLauncherDir(PathBuf),

    #[error("launcher folder has no parent to use as repository root: {0}")]
    NoRepositoryRoot(PathBuf),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
