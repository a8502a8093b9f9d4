//! Domain entities: core data structures

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::{DomainError, DomainResult};

/// Shell convention: a child killed by signal N reports `128 + N`.
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// Paths handed to the generator, relative to the repository root.
///
/// They are forwarded verbatim: never canonicalized, never checked for existence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    /// Generator script, e.g. `scripts/gen_uml_from_spec.py`
    pub script: PathBuf,
    /// Input spec file, e.g. `temp/spec.json`
    pub spec: PathBuf,
    /// Output template, e.g. `scripts/template.uml.tpl`
    pub template: PathBuf,
    /// Output directory, e.g. `temp`
    pub out_dir: PathBuf,
}

/// Fully resolved generator command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorInvocation {
    /// Program to spawn (interpreter, or the script itself)
    pub program: OsString,
    /// Positional arguments, in order
    pub args: Vec<OsString>,
    /// Working directory of the child (repository root)
    pub working_dir: PathBuf,
}

impl GeneratorInvocation {
    /// Build the invocation `<interpreter> <script> <spec> <template> <out_dir>`.
    ///
    /// An empty interpreter runs the script directly:
    /// `<script> <spec> <template> <out_dir>`.
    pub fn new(interpreter: &str, paths: &GeneratorPaths, working_dir: PathBuf) -> Self {
        let generator_args = [&paths.spec, &paths.template, &paths.out_dir]
            .into_iter()
            .map(|p| p.as_os_str().to_os_string());

        let (program, args) = if interpreter.trim().is_empty() {
            (
                paths.script.as_os_str().to_os_string(),
                generator_args.collect(),
            )
        } else {
            let mut args = vec![paths.script.as_os_str().to_os_string()];
            args.extend(generator_args);
            (OsString::from(interpreter), args)
        };

        Self {
            program,
            args,
            working_dir,
        }
    }

    /// Human-readable command line, for logs and error messages.
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How the generator process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorExit {
    /// Normal termination with an exit code
    Code(i32),
    /// Killed by a signal (Unix)
    Signal(i32),
}

impl GeneratorExit {
    /// Exit code the launcher forwards.
    ///
    /// Codes pass through unchanged; signals map to `128 + N`.
    pub fn exit_code(&self) -> i32 {
        match self {
            GeneratorExit::Code(code) => *code,
            GeneratorExit::Signal(signal) => SIGNAL_EXIT_BASE + signal,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, GeneratorExit::Code(0))
    }
}

/// Repository root for a launcher located at `launcher`.
///
/// The root is the parent of the folder containing the launcher:
/// `<root>/scripts/umlgen` yields `<root>`.
pub fn repo_root_from_launcher(launcher: &Path) -> DomainResult<PathBuf> {
    let launcher_dir = launcher
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| DomainError::NoLauncherDir(launcher.to_path_buf()))?;

    launcher_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| DomainError::NoRepositoryRoot(launcher_dir.to_path_buf()))
}

/// Expand environment variables and tilde in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
