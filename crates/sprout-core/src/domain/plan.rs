//! The ordered list of setup steps derived from the settings flags.
//!
//! Building a plan is pure. Executing it is the job of
//! `application::services::SetupService`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{command::CommandSpec, settings::SetupFlags, toolchain::Toolchain};

/// Files that only make sense inside a repository. Other VCS files such as
/// `.gitignore` stay, since the project may live inside a monorepo.
pub const VCS_ONLY_PATHS: &[&str] = &[".pre-commit-config.yaml", ".github"];

/// What a failing verification run means for the whole setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationPolicy {
    /// Failure aborts setup.
    Enforced,
    /// Failure is reported and setup continues.
    BestEffort,
}

impl VerificationPolicy {
    pub fn from_flags(flags: SetupFlags) -> Self {
        if flags.enforce_checks {
            Self::Enforced
        } else {
            Self::BestEffort
        }
    }

    pub fn is_enforced(self) -> bool {
        self == Self::Enforced
    }
}

impl fmt::Display for VerificationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enforced => f.write_str("enforced"),
            Self::BestEffort => f.write_str("best-effort"),
        }
    }
}

/// A single unit of setup work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupStep {
    /// Rewrite the settings document in canonical form.
    NormalizeSettings { path: PathBuf },
    /// `git init`, stage everything, initial commit.
    InitializeRepository { commands: Vec<CommandSpec> },
    /// Delete repository-only files when no repository is wanted.
    RemoveVcsFiles { paths: Vec<PathBuf> },
    /// Lock then install dependencies.
    InstallDependencies { commands: Vec<CommandSpec> },
    /// Install the commit-hook runner into the repository.
    InstallHooks { command: CommandSpec },
    /// Run the verification tool.
    Verify {
        command: CommandSpec,
        policy: VerificationPolicy,
    },
    /// Print the manual follow-up instructions.
    PrintNotices,
}

impl SetupStep {
    /// Short, stable name used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NormalizeSettings { .. } => "normalize-settings",
            Self::InitializeRepository { .. } => "initialize-repository",
            Self::RemoveVcsFiles { .. } => "remove-vcs-files",
            Self::InstallDependencies { .. } => "install-dependencies",
            Self::InstallHooks { .. } => "install-hooks",
            Self::Verify { .. } => "verify",
            Self::PrintNotices => "print-notices",
        }
    }

    /// Commands this step would spawn, in order.
    pub fn commands(&self) -> Vec<&CommandSpec> {
        match self {
            Self::InitializeRepository { commands } | Self::InstallDependencies { commands } => {
                commands.iter().collect()
            }
            Self::InstallHooks { command } | Self::Verify { command, .. } => vec![command],
            Self::NormalizeSettings { .. } | Self::RemoveVcsFiles { .. } | Self::PrintNotices => {
                Vec::new()
            }
        }
    }
}

/// Ordered setup steps for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    flags: SetupFlags,
    steps: Vec<SetupStep>,
}

impl SetupPlan {
    /// Derive the steps for `flags`.
    ///
    /// Order: normalize settings, repository setup (or VCS file removal),
    /// dependencies, hooks (enforced only), verification, notices.
    pub fn build(
        flags: SetupFlags,
        toolchain: &Toolchain,
        project_root: &Path,
        settings_path: &Path,
    ) -> Self {
        let mut steps = vec![SetupStep::NormalizeSettings {
            path: settings_path.to_path_buf(),
        }];

        if flags.initialize_git {
            steps.push(SetupStep::InitializeRepository {
                commands: vec![
                    toolchain.git_init(project_root),
                    toolchain.git_add_all(project_root),
                    toolchain.git_commit(project_root),
                ],
            });
        } else {
            steps.push(SetupStep::RemoveVcsFiles {
                paths: VCS_ONLY_PATHS
                    .iter()
                    .map(|p| project_root.join(p))
                    .collect(),
            });
        }

        steps.push(SetupStep::InstallDependencies {
            commands: vec![
                toolchain.dependency_lock(project_root),
                toolchain.dependency_install(project_root),
            ],
        });

        let policy = VerificationPolicy::from_flags(flags);
        if policy.is_enforced() {
            steps.push(SetupStep::InstallHooks {
                command: toolchain.hook_install(project_root),
            });
        }

        steps.push(SetupStep::Verify {
            command: toolchain.verification(project_root, policy.is_enforced()),
            policy,
        });
        steps.push(SetupStep::PrintNotices);

        Self { flags, steps }
    }

    pub fn flags(&self) -> SetupFlags {
        self.flags
    }

    pub fn steps(&self) -> &[SetupStep] {
        &self.steps
    }

    /// Human-readable description, one line per action.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            let n = index + 1;
            match step {
                SetupStep::NormalizeSettings { path } => {
                    lines.push(format!("{n}. normalize {}", path.display()));
                }
                SetupStep::RemoveVcsFiles { paths } => {
                    lines.push(format!("{n}. remove repository-only files (if present)"));
                    for path in paths {
                        lines.push(format!("     - {}", path.display()));
                    }
                }
                SetupStep::Verify { policy, .. } => {
                    lines.push(format!("{n}. verify ({policy})"));
                }
                SetupStep::PrintNotices => lines.push(format!("{n}. print follow-up notices")),
                other => lines.push(format!("{n}. {}", other.label().replace('-', " "))),
            }
            for command in step.commands() {
                lines.push(format!("     $ {command}"));
            }
        }
        lines
    }
}
