//! Generator launcher service
//!
//! Resolves the repository root from the launcher's own location, enters it,
//! and runs the external UML generator with the configured relative paths.
//! The generator's standard streams are inherited; its exit status is the
//! only thing consumed.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{repo_root_from_launcher, GeneratorExit, GeneratorInvocation};
use crate::infrastructure::traits::{CommandRunner, FileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Launcher for the external generator.
pub struct LauncherService {
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl LauncherService {
    /// Create a new launcher service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        settings: Arc<Settings>,
    ) -> Self {
        Self { fs, cmd, settings }
    }

    /// Resolve the repository root.
    ///
    /// Uses the configured `root` when set, otherwise the parent of the
    /// folder containing the launcher executable. The result is canonical
    /// and guaranteed to be a directory.
    #[instrument(skip(self))]
    pub fn resolve_root(&self) -> ApplicationResult<PathBuf> {
        let root = match &self.settings.root {
            Some(root) => {
                debug!("root from settings: {}", root.display());
                root.clone()
            }
            None => {
                let exe = self.fs.current_exe().with_context("locate launcher")?;
                let exe = self
                    .fs
                    .canonicalize(&exe)
                    .with_path_context("resolve launcher", &exe)?;
                debug!("launcher: {}", exe.display());
                repo_root_from_launcher(&exe)?
            }
        };

        let root = self
            .fs
            .canonicalize(&root)
            .with_path_context("resolve repository root", &root)?;

        if !self.fs.is_dir(&root) {
            return Err(ApplicationError::RootNotDirectory(root));
        }

        debug!("repository root: {}", root.display());
        Ok(root)
    }

    /// Generator invocation rooted at `root`.
    pub fn invocation(&self, root: PathBuf) -> GeneratorInvocation {
        GeneratorInvocation::new(
            &self.settings.interpreter,
            &self.settings.generator_paths(),
            root,
        )
    }

    /// Enter the repository root, run the generator, wait for it.
    ///
    /// Returns how the generator terminated. Root resolution failures are
    /// reported before anything is spawned.
    pub fn run(&self) -> InfraResult<GeneratorExit> {
        let root = self.resolve_root()?;

        self.fs
            .set_current_dir(&root)
            .with_path_context("enter repository root", &root)?;

        let invocation = self.invocation(root);
        info!(
            command = %invocation.command_line(),
            cwd = %invocation.working_dir.display(),
            "running generator"
        );

        let exit = self
            .cmd
            .status(&invocation)
            .map_err(|e| InfraError::spawn(invocation.program.clone(), e))?;

        debug!(?exit, code = exit.exit_code(), "generator finished");
        Ok(exit)
    }
}
