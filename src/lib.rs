//! umlgen: run the UML generator from the repository root
//!
//! Layers, innermost first:
//! - [`domain`]: launcher layout and the generator invocation (no I/O)
//! - [`application`]: the launcher service
//! - [`infrastructure`]: I/O boundary traits and wiring
//! - [`cli`]: argument parsing, errors, exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
