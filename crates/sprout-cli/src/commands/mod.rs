//! Subcommand handlers. Each module exposes an `execute` function.

pub mod completions;
pub mod config;
pub mod notices;
pub mod plan;
pub mod run;

use std::path::PathBuf;

use sprout_adapters::{LocalFilesystem, SystemRunner};
use sprout_core::application::SetupService;

use crate::cli::ProjectArgs;
use crate::config::AppConfig;
use crate::output::OutputManager;

/// Wire the production adapters into a [`SetupService`].
///
/// In json mode tool output goes to stderr so stdout carries only the
/// summary document.
fn setup_service(config: &AppConfig, output: &OutputManager) -> SetupService {
    let runner = if output.is_json() {
        SystemRunner::with_stdout_to_stderr()
    } else {
        SystemRunner::new()
    };
    SetupService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(runner),
        config.tools.clone(),
    )
}

/// Settings document location for a `run` / `plan` invocation.
fn settings_path(args: &ProjectArgs, config: &AppConfig) -> PathBuf {
    config.settings_path(&args.project_dir, args.settings.as_deref())
}
