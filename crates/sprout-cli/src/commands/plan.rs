//! `sprout plan`: show the setup steps without running anything.

use serde::Serialize;
use sprout_core::domain::{SetupPlan, SetupStep};

use crate::{cli::ProjectArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct PlanStep {
    step: &'static str,
    commands: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    paths: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<String>,
}

#[derive(Debug, Serialize)]
struct PlanSummary {
    initialize_git: bool,
    enforce_checks: bool,
    steps: Vec<PlanStep>,
}

impl From<&SetupPlan> for PlanSummary {
    fn from(plan: &SetupPlan) -> Self {
        let steps = plan
            .steps()
            .iter()
            .map(|step| PlanStep {
                step: step.label(),
                commands: step.commands().iter().map(|c| c.to_string()).collect(),
                paths: match step {
                    SetupStep::NormalizeSettings { path } => vec![path.display().to_string()],
                    SetupStep::RemoveVcsFiles { paths } => {
                        paths.iter().map(|p| p.display().to_string()).collect()
                    }
                    _ => Vec::new(),
                },
                policy: match step {
                    SetupStep::Verify { policy, .. } => Some(policy.to_string()),
                    _ => None,
                },
            })
            .collect();

        Self {
            initialize_git: plan.flags().initialize_git,
            enforce_checks: plan.flags().enforce_checks,
            steps,
        }
    }
}

pub fn execute(args: ProjectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings_path = super::settings_path(&args, &config);
    let plan = super::setup_service(&config, &output).plan(&args.project_dir, &settings_path)?;

    if output.is_json() {
        output.json(&PlanSummary::from(&plan))?;
        return Ok(());
    }

    let flags = plan.flags();
    output.header(&format!(
        "Setup plan (initialize_git={}, enforce_checks_on_creation={})",
        flags.initialize_git, flags.enforce_checks
    ))?;
    for line in plan.describe() {
        output.print(&line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use sprout_core::domain::{SetupFlags, Toolchain};

    #[test]
    fn summary_lists_steps_in_order() {
        let plan = SetupPlan::build(
            SetupFlags {
                enforce_checks: true,
                initialize_git: true,
            },
            &Toolchain::default(),
            Path::new("demo"),
            Path::new("demo/.cookiecutter.json"),
        );

        let summary = PlanSummary::from(&plan);
        let labels: Vec<_> = summary.steps.iter().map(|s| s.step).collect();
        assert_eq!(labels.first(), Some(&"normalize-settings"));
        assert_eq!(labels.last(), Some(&"print-notices"));
        assert!(labels.contains(&"install-hooks"));

        let verify = summary.steps.iter().find(|s| s.step == "verify").unwrap();
        assert_eq!(verify.policy.as_deref(), Some("enforced"));
        assert!(verify.commands[0].contains(" -x "));
    }
}
