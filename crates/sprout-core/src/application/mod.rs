//! Application layer for Sprout.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SetupService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer's plan but contains no
//! decisions of its own about *which* steps run; those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{SetupReport, SetupService, VerificationOutcome, print_notices};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, ProgressReporter};

pub use error::ApplicationError;
