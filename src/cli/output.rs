//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print an error and its source chain to stderr
pub fn error_chain(err: &(dyn std::error::Error + 'static)) {
    error(err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".yellow(), cause);
        source = cause.source();
    }
}

/// Write clap's help, version or usage message to `out`.
///
/// Returns `code`, or `OSERR` when the message cannot be written.
pub fn clap_message(err: &clap::Error, out: &mut dyn Write, code: i32) -> i32 {
    match write!(out, "{}", err.render()).and_then(|_| out.flush()) {
        Ok(()) => code,
        Err(e) => {
            tracing::warn!("cannot write {:?} message: {}", err.kind(), e);
            crate::exitcode::OSERR
        }
    }
}
