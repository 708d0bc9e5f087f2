//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Sprout, the
//! post-generation setup sequencer, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sprout-cli (CLI)             │
//! │     (Implements ProgressReporter)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │             (SetupService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │      (Filesystem, CommandRunner)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     sprout-adapters (Infrastructure)    │
//! │   (LocalFilesystem, SystemRunner, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (SettingsDocument, SetupPlan, Toolchain)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use sprout_core::{application::SetupService, domain::Toolchain};
//!
//! let service = SetupService::new(filesystem, runner, Toolchain::default());
//! let report = service.run(
//!     Path::new("."),
//!     Path::new(".cookiecutter.json"),
//!     &reporter,
//! )?;
//! ```

pub mod domain;

pub mod application;

pub mod error;
