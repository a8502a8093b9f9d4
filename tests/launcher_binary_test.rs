//! End-to-end tests: the built launcher copied into `<root>/scripts/`.

#![cfg(unix)]

use std::ffi::OsStr;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Write `scripts/gen.sh` under `root` with `body`.
fn write_generator(root: &Path, body: &str) {
    let scripts = root.join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    fs::write(scripts.join("gen.sh"), format!("#!/bin/sh\n{body}\n")).unwrap();
}

/// Launcher command isolated from the caller's umlgen settings.
///
/// Every `UMLGEN_*` variable and the user config directory are hidden; the
/// generator is `sh scripts/gen.sh`.
fn isolated_command(launcher: &Path, config_home: &Path) -> Command {
    let mut cmd = Command::new(launcher);
    for (key, _) in std::env::vars_os() {
        if key.as_bytes().starts_with(b"UMLGEN_") {
            cmd.env_remove(key);
        }
    }
    cmd.current_dir(std::env::temp_dir())
        .env("XDG_CONFIG_HOME", config_home)
        .env("UMLGEN_INTERPRETER", "sh")
        .env("UMLGEN_SCRIPT", "scripts/gen.sh");
    cmd
}

/// Copy the launcher binary into `<root>/scripts/` and run it from elsewhere.
fn run_installed_launcher(root: &Path, generator: &str) -> Output {
    write_generator(root, generator);

    let launcher = root.join("scripts").join("umlgen");
    fs::copy(env!("CARGO_BIN_EXE_umlgen"), &launcher).unwrap();

    let config_home = TempDir::new().unwrap();
    isolated_command(&launcher, config_home.path())
        .output()
        .unwrap()
}

#[test]
fn given_launcher_in_scripts_when_run_then_generator_runs_in_root() {
    // Arrange
    let repo = TempDir::new().unwrap();
    let root = fs::canonicalize(repo.path()).unwrap();

    // Act
    let output = run_installed_launcher(&root, "pwd -P; echo \"$@\"");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some(root.to_string_lossy().as_ref()));
    assert_eq!(
        lines.next(),
        Some("temp/spec.json scripts/template.uml.tpl temp")
    );
}

#[test]
fn given_generator_fails_when_run_then_launcher_exits_with_same_code() {
    // Arrange
    let repo = TempDir::new().unwrap();

    // Act
    let output = run_installed_launcher(repo.path(), "echo boom >&2; exit 5");

    // Assert
    assert_eq!(output.status.code(), Some(5));
    assert_eq!(String::from_utf8_lossy(&output.stderr).trim(), "boom");
}

#[test]
fn given_unrelated_non_utf8_variable_when_run_then_generator_code_is_forwarded() {
    // Arrange
    let repo = TempDir::new().unwrap();
    write_generator(repo.path(), "exit 4");
    let config_home = TempDir::new().unwrap();

    // Act
    let output = isolated_command(
        Path::new(env!("CARGO_BIN_EXE_umlgen")),
        config_home.path(),
    )
    .env("UMLGEN_ROOT", repo.path())
    .env("SOME_UNRELATED_VAR", OsStr::from_bytes(b"caf\xe9"))
    .output()
    .unwrap();

    // Assert
    assert_eq!(
        output.status.code(),
        Some(4),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn given_stray_argument_when_run_then_exits_with_usage_and_generator_is_not_invoked() {
    // Arrange: the generator leaves a marker behind if it ever runs
    let repo = TempDir::new().unwrap();
    write_generator(repo.path(), "touch ran.marker");
    let config_home = TempDir::new().unwrap();

    // Act
    let output = isolated_command(
        Path::new(env!("CARGO_BIN_EXE_umlgen")),
        config_home.path(),
    )
    .env("UMLGEN_ROOT", repo.path())
    .arg("unexpected")
    .output()
    .unwrap();

    // Assert
    assert_eq!(output.status.code(), Some(64));
    assert!(!repo.path().join("ran.marker").exists());
}

#[test]
fn given_no_argument_when_run_then_marker_generator_runs() {
    // Arrange: same generator as above, without the stray argument
    let repo = TempDir::new().unwrap();
    write_generator(repo.path(), "touch ran.marker");
    let config_home = TempDir::new().unwrap();

    // Act
    let output = isolated_command(
        Path::new(env!("CARGO_BIN_EXE_umlgen")),
        config_home.path(),
    )
    .env("UMLGEN_ROOT", repo.path())
    .output()
    .unwrap();

    // Assert
    assert!(output.status.success());
    assert!(repo.path().join("ran.marker").exists());
}
