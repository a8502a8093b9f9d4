//! Application services
//!
//! Services depend on I/O boundary traits (FileSystem, CommandRunner)
//! but are themselves concrete structs, not traits.

mod launcher;

pub use launcher::LauncherService;
