//! Unified error handling for Sprout Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Sprout Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SproutError {
    /// Errors from the domain layer (settings document, toolchain).
    #[error("Settings error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, external commands).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl SproutError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Every domain error stems from the settings document or tool config.
            Self::Domain(_) => ErrorCategory::Configuration,
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the failure came from a missing or unusable program.
    pub fn is_tool_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::CommandNotFound { .. } | ApplicationError::CommandSpawn { .. }
            )
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Configuration,
    ExternalTool,
    Internal,
}

/// Convenient result type alias.
pub type SproutResult<T> = Result<T, SproutError>;
