//! Names of the external tools the setup sequence drives.
//!
//! Every command the sequencer runs is built here, so the exact flags live
//! in one place. All commands run from the project root.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{command::CommandSpec, error::DomainError};

/// Verification sessions that need network access or serve documentation.
pub const VERIFICATION_SESSION_FILTER: &str = "not safety and not docs";

const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// External programs used during setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    /// Version control executable.
    pub git: String,
    /// Dependency manager executable; hooks and verification run through it.
    pub package_manager: String,
    /// Commit-hook runner, invoked via the package manager.
    pub hook_runner: String,
    /// Verification / test-automation runner, invoked via the package manager.
    pub verifier: String,
    /// Branch created by `git init`.
    pub default_branch: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            git: "git".into(),
            package_manager: "poetry".into(),
            hook_runner: "pre-commit".into(),
            verifier: "nox".into(),
            default_branch: "master".into(),
        }
    }
}

impl Toolchain {
    /// Reject blank program names before anything is spawned.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields: [(&'static str, &str); 5] = [
            ("git", &self.git),
            ("package_manager", &self.package_manager),
            ("hook_runner", &self.hook_runner),
            ("verifier", &self.verifier),
            ("default_branch", &self.default_branch),
        ];
        for (role, value) in fields {
            if value.trim().is_empty() {
                return Err(DomainError::EmptyProgram { role });
            }
        }
        Ok(())
    }

    // ── version control ───────────────────────────────────────────────────

    pub fn git_init(&self, root: &Path) -> CommandSpec {
        CommandSpec::new(&self.git)
            .args(["init", "-q", "-b", self.default_branch.as_str()])
            .current_dir(root)
    }

    pub fn git_add_all(&self, root: &Path) -> CommandSpec {
        CommandSpec::new(&self.git).args(["add", "."]).current_dir(root)
    }

    pub fn git_commit(&self, root: &Path) -> CommandSpec {
        CommandSpec::new(&self.git)
            .args(["commit", "-m", INITIAL_COMMIT_MESSAGE])
            .current_dir(root)
    }

    // ── dependencies ──────────────────────────────────────────────────────

    pub fn dependency_lock(&self, root: &Path) -> CommandSpec {
        self.package_manager(root).arg("lock")
    }

    pub fn dependency_install(&self, root: &Path) -> CommandSpec {
        self.package_manager(root).arg("install")
    }

    // ── hooks & verification ──────────────────────────────────────────────

    pub fn hook_install(&self, root: &Path) -> CommandSpec {
        self.package_manager(root)
            .args(["run", self.hook_runner.as_str(), "install"])
    }

    /// Verification run. `stop_on_first_failure` adds `-x`.
    pub fn verification(&self, root: &Path, stop_on_first_failure: bool) -> CommandSpec {
        let mut cmd = self
            .package_manager(root)
            .args(["run", self.verifier.as_str()]);
        if stop_on_first_failure {
            cmd = cmd.arg("-x");
        }
        cmd.args([
            "--error-on-missing-interpreters",
            "--error-on-external-run",
            "--non-interactive",
            "-k",
            VERIFICATION_SESSION_FILTER,
        ])
    }

    /// Non-interactive, colourless package manager invocation.
    fn package_manager(&self, root: &Path) -> CommandSpec {
        CommandSpec::new(&self.package_manager)
            .args(["--no-ansi", "-n"])
            .current_dir(root)
    }
}
