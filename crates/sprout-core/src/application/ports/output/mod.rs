//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the setup sequencer needs from the outside
//! world. The `sprout-adapters` crate provides implementations; the CLI
//! provides the [`ProgressReporter`].

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::CommandSpec;
use crate::error::SproutResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> SproutResult<String>;

    /// Replace a file's content, creating it if needed.
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> SproutResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SproutResult<()>;
}

/// Port for running external programs.
///
/// Implementations block until the program exits. There is no timeout.
///
/// Implemented by:
/// - `sprout_adapters::process::SystemRunner` (production)
/// - `sprout_adapters::process::ScriptedRunner` (testing)
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::CommandFailed` on a non-zero exit
    /// - `ApplicationError::CommandNotFound` when the program is missing
    /// - `ApplicationError::CommandSpawn` for any other start-up failure
    fn run(&self, command: &CommandSpec) -> SproutResult<()>;
}

/// Port for user-facing progress text.
///
/// Separate from `tracing`: these lines are the product's output, not
/// diagnostics, and must show up regardless of log level.
pub trait ProgressReporter {
    /// A stage is starting.
    fn announce(&self, message: &str);

    /// Something went wrong but setup continues.
    fn warn(&self, message: &str);

    /// Plain follow-up text.
    fn notice(&self, message: &str);
}
