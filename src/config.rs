//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/umlgen/umlgen.toml`
//! 3. Environment variables: `UMLGEN_*` prefix

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{expand_env_vars, GeneratorPaths};

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "UMLGEN";

/// Environment variable holding the tracing filter (EnvFilter syntax).
pub const LOG_ENV: &str = "UMLGEN_LOG";

/// Interpreter used to run the generator script when none is configured.
#[cfg(windows)]
pub const DEFAULT_INTERPRETER: &str = "python";
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Unified configuration for umlgen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Interpreter for the generator script; empty runs the script directly
    pub interpreter: String,
    /// Generator script, relative to the repository root
    pub script: PathBuf,
    /// Input spec file, relative to the repository root
    pub spec: PathBuf,
    /// Template file, relative to the repository root
    pub template: PathBuf,
    /// Output directory, relative to the repository root
    pub out_dir: PathBuf,
    /// Repository root override (default: parent of the launcher's folder)
    pub root: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_INTERPRETER.into(),
            script: PathBuf::from("scripts/gen_uml_from_spec.py"),
            spec: PathBuf::from("temp/spec.json"),
            template: PathBuf::from("scripts/template.uml.tpl"),
            out_dir: PathBuf::from("temp"),
            root: None,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub interpreter: Option<String>,
    pub script: Option<PathBuf>,
    pub spec: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub root: Option<PathBuf>,
}

/// Get the XDG config directory for umlgen.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "umlgen").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("umlgen.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// `UMLGEN_*` variables with UTF-8 keys and values.
///
/// Everything else in the environment is skipped, including variables that
/// are not valid UTF-8.
fn prefixed_env_vars<I>(vars: I) -> Map<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let prefix = format!("{ENV_PREFIX}_");
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .filter(|(key, _)| key.starts_with(&prefix))
        .collect()
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Paths forwarded to the generator.
    pub fn generator_paths(&self) -> GeneratorPaths {
        GeneratorPaths {
            script: self.script.clone(),
            spec: self.spec.clone(),
            template: self.template.clone(),
            out_dir: self.out_dir.clone(),
        }
    }

    /// Expand shell variables and tilde in `root` and `interpreter`.
    ///
    /// The generator paths stay verbatim: they are relative to the root.
    fn expand_paths(&mut self) {
        self.root = self
            .root
            .as_ref()
            .map(|root| PathBuf::from(expand_env_vars(root.to_string_lossy().as_ref())));
        self.interpreter = expand_env_vars(&self.interpreter);
    }

    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            interpreter: overlay
                .interpreter
                .clone()
                .unwrap_or_else(|| self.interpreter.clone()),
            script: overlay.script.clone().unwrap_or_else(|| self.script.clone()),
            spec: overlay.spec.clone().unwrap_or_else(|| self.spec.clone()),
            template: overlay
                .template
                .clone()
                .unwrap_or_else(|| self.template.clone()),
            out_dir: overlay
                .out_dir
                .clone()
                .unwrap_or_else(|| self.out_dir.clone()),
            root: overlay.root.clone().or_else(|| self.root.clone()),
        }
    }

    /// Load settings with layered precedence from the standard locations.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `global_path`, if it exists
    /// 3. Environment variables: `UMLGEN_*` prefix
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply UMLGEN_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(prefixed_env_vars(std::env::vars_os()))),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("interpreter") {
            settings.interpreter = val;
        }
        if let Ok(val) = config.get_string("script") {
            settings.script = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("spec") {
            settings.spec = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("template") {
            settings.template = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("out_dir") {
            settings.out_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("root") {
            settings.root = Some(PathBuf::from(val));
        }

        Ok(settings)
    }
}
