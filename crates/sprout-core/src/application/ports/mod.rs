//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprout-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: reading/rewriting the settings document, removing VCS files
//!   - `CommandRunner`: git, the package manager, hook runner and verifier
//!   - `ProgressReporter`: user-facing progress text
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandRunner, Filesystem, ProgressReporter};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
