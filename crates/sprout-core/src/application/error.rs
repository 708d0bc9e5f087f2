//! Application layer errors.
//!
//! These errors represent failures while executing the setup sequence:
//! filesystem access and external commands. Settings document problems are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during setup orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The settings document does not exist.
    #[error("Settings document not found at {path}")]
    SettingsNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A command ran and exited unsuccessfully.
    #[error("Command `{command}` failed with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// The program could not be found on PATH.
    #[error("Program '{program}' is not installed or not on PATH")]
    CommandNotFound { program: String },

    /// The program exists but could not be started.
    #[error("Could not start `{command}`: {reason}")]
    CommandSpawn { command: String, reason: String },

    /// Verification failed while checks were enforced.
    #[error("Verification failed: {reason}")]
    VerificationFailed { command: String, reason: String },

    /// A lock guarding an adapter was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_owned(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SettingsNotFound { path } => vec![
                format!("Expected the settings document at: {}", path.display()),
                "Run sprout from the root of the generated project".into(),
                "Or point at it with --project-dir / --settings".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Re-run manually to see the full output: {}", command),
                "Check the command output above for details".into(),
            ],
            Self::CommandNotFound { program } => vec![
                format!("Install '{}' and make sure it is on your PATH", program),
                "Or override the tool name in the [tools] section of your config".into(),
            ],
            Self::VerificationFailed { command, .. } => vec![
                format!("Re-run the verification manually: {}", command),
                "Set enforce_checks_on_creation to false to continue past verification failures"
                    .into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SettingsNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::CommandFailed { .. }
            | Self::CommandNotFound { .. }
            | Self::CommandSpawn { .. }
            | Self::VerificationFailed { .. } => ErrorCategory::ExternalTool,
        }
    }
}
