// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sprout.
//!
//! This module contains pure logic with no I/O. Reading the settings file,
//! spawning processes and printing are handled via ports (traits) defined
//! in the application layer.
//!
//! - **No I/O**: no filesystem, process, or terminal access
//! - **Values only**: plans and commands are `Clone + PartialEq`
//! - **Deterministic**: the same flags always produce the same plan
pub mod command;
pub mod error;
pub mod notices;
pub mod plan;
pub mod settings;
pub mod toolchain;

// Re-exports for convenience
pub use command::CommandSpec;
pub use error::DomainError;
pub use plan::{SetupPlan, SetupStep, VCS_ONLY_PATHS, VerificationPolicy};
pub use settings::{
    ENFORCE_CHECKS_KEY, INITIALIZE_GIT_KEY, SETTINGS_FILE_NAME, SettingsDocument, SetupFlags,
};
pub use toolchain::Toolchain;
