//! CLI argument definitions using clap

use std::ffi::OsString;

use clap::Parser;

use crate::cli::CliResult;

/// Run the UML generator from the repository root and forward its exit code.
///
/// Takes no arguments. Settings come from `~/.config/umlgen/umlgen.toml`
/// and `UMLGEN_*` environment variables; `UMLGEN_LOG` sets the log filter.
#[derive(Parser, Debug)]
#[command(name = "umlgen")]
#[command(version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parse `args` (including the program name).
    ///
    /// Any argument besides `--help`/`--version` is a usage error.
    pub fn try_parse_args<I, T>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?)
    }
}
