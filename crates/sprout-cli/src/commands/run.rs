//! `sprout run`: execute the full setup sequence.

use std::path::PathBuf;

use serde::Serialize;
use sprout_core::application::{SetupReport, VerificationOutcome};
use tracing::info;

use crate::{cli::ProjectArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// JSON shape of a finished run.
#[derive(Debug, Serialize)]
struct RunSummary {
    initialize_git: bool,
    enforce_checks: bool,
    steps: Vec<&'static str>,
    removed: Vec<PathBuf>,
    verification: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification_error: Option<String>,
}

impl From<SetupReport> for RunSummary {
    fn from(report: SetupReport) -> Self {
        let (verification, verification_error) = match report.verification {
            VerificationOutcome::Passed => ("passed", None),
            VerificationOutcome::Skipped { reason } => ("skipped", Some(reason)),
        };
        Self {
            initialize_git: report.flags.initialize_git,
            enforce_checks: report.flags.enforce_checks,
            steps: report.executed,
            removed: report.removed,
            verification,
            verification_error,
        }
    }
}

pub fn execute(args: ProjectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings_path = super::settings_path(&args, &config);
    let service = super::setup_service(&config, &output);

    let report = service.run(&args.project_dir, &settings_path, &output)?;
    info!(
        steps = report.executed.len(),
        removed = report.removed.len(),
        "Project set up"
    );

    if output.is_json() {
        output.json(&RunSummary::from(report))?;
    }
    Ok(())
}
