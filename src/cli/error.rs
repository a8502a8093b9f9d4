//! CLI-level errors (wraps infrastructure errors)

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Infra(#[from] InfraError),

    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // --help and --version surface as clap errors on stdout
            CliError::Usage(e) if !e.use_stderr() => crate::exitcode::OK,
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Application(ApplicationError::Config { .. }) => {
                    crate::exitcode::CONFIG
                }
                InfraError::Application(_) => crate::exitcode::OSERR,
                InfraError::Spawn { source, .. } => match source.kind() {
                    io::ErrorKind::NotFound => crate::exitcode::NOTFOUND,
                    io::ErrorKind::PermissionDenied => crate::exitcode::NOEXEC,
                    _ => crate::exitcode::OSERR,
                },
            },
        }
    }
}
