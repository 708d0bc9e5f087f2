//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "set up a freshly generated project".

pub mod setup_service;

pub use setup_service::{SetupReport, SetupService, VerificationOutcome, print_notices};
