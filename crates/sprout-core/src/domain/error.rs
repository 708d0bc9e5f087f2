// ============================================================================
// domain/error.rs - SETTINGS DOCUMENT ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Document shape errors
    // ========================================================================
    #[error("Settings document is not valid JSON: {reason}")]
    MalformedSettings { reason: String },

    #[error("Settings document must be a JSON object, found {found}")]
    SettingsNotObject { found: &'static str },

    // ========================================================================
    // Flag coercion errors
    // ========================================================================
    #[error("Option '{key}' has value {value} which cannot be read as a yes/no flag")]
    InvalidFlag { key: String, value: String },

    // ========================================================================
    // Toolchain errors
    // ========================================================================
    #[error("Tool '{role}' has an empty program name")]
    EmptyProgram { role: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedSettings { reason } => vec![
                format!("Parser said: {}", reason),
                "The settings document is written by the template engine; re-generate the project if it was edited by hand".into(),
            ],
            Self::SettingsNotObject { .. } => vec![
                "The settings document must contain a single top-level JSON object".into(),
            ],
            Self::InvalidFlag { key, .. } => vec![
                format!("Set '{}' to true or false", key),
                "Accepted strings: yes/no, y/n, true/false, on/off, 1/0".into(),
            ],
            Self::EmptyProgram { role } => vec![
                format!("Give the '{}' tool a program name in your configuration", role),
                "Run 'sprout config list' to inspect the active tool names".into(),
            ],
        }
    }
}
