//! Setup Service - the post-generation sequencer.
//!
//! This service coordinates the one-time setup of a freshly generated project:
//! 1. Load and normalize the settings document
//! 2. Initialize a repository, or strip repository-only files
//! 3. Install dependencies (and commit hooks when checks are enforced)
//! 4. Run the verification tool, tolerating failure unless enforced
//! 5. Print follow-up notices
//!
//! Every step runs to completion before the next one starts. Any failure
//! aborts the sequence, except a best-effort verification run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, ProgressReporter},
    },
    domain::{
        CommandSpec, SettingsDocument, SetupFlags, SetupPlan, SetupStep, Toolchain,
        VerificationPolicy, notices,
    },
    error::{SproutError, SproutResult},
};

/// How the verification step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The verifier exited successfully.
    Passed,
    /// The verifier failed or was missing and the policy was best-effort.
    Skipped { reason: String },
}

/// Summary of a completed setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub flags: SetupFlags,
    /// Labels of the steps that ran, in order.
    pub executed: Vec<&'static str>,
    /// Repository-only paths that were actually deleted.
    pub removed: Vec<PathBuf>,
    pub verification: VerificationOutcome,
}

/// Main setup service.
pub struct SetupService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    toolchain: Toolchain,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sprout_core::{application::SetupService, domain::Toolchain};
    ///
    /// let service = SetupService::new(
    ///     filesystem, // impl Filesystem
    ///     runner,     // impl CommandRunner
    ///     Toolchain::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
        toolchain: Toolchain,
    ) -> Self {
        Self {
            filesystem,
            runner,
            toolchain,
        }
    }

    /// Read and parse the settings document.
    pub fn load_settings(&self, path: &Path) -> SproutResult<SettingsDocument> {
        if !self.filesystem.is_file(path) {
            return Err(ApplicationError::SettingsNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let text = self.filesystem.read_to_string(path)?;
        Ok(SettingsDocument::parse(&text)?)
    }

    /// Rewrite the settings document in canonical form and return it.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn normalize_settings(&self, path: &Path) -> SproutResult<SettingsDocument> {
        let settings = self.load_settings(path)?;
        self.filesystem.write_file(path, &settings.normalized())?;
        debug!(entries = settings.len(), "Settings document normalized");
        Ok(settings)
    }

    /// Work out what [`Self::run`] would do, without side effects.
    pub fn plan(&self, project_root: &Path, settings_path: &Path) -> SproutResult<SetupPlan> {
        let settings = self.load_settings(settings_path)?;
        self.build_plan(&settings, project_root, settings_path)
    }

    /// Run the whole setup sequence.
    ///
    /// This is the main use case.
    #[instrument(
        skip_all,
        fields(
            project_root = %project_root.display(),
            settings = %settings_path.display()
        )
    )]
    pub fn run(
        &self,
        project_root: &Path,
        settings_path: &Path,
        reporter: &dyn ProgressReporter,
    ) -> SproutResult<SetupReport> {
        // The document is rewritten before its flags are read, so an
        // unreadable flag still leaves it in canonical form.
        let settings = self.normalize_settings(settings_path)?;
        let plan = self.build_plan(&settings, project_root, settings_path)?;
        let flags = plan.flags();
        info!(
            initialize_git = flags.initialize_git,
            enforce_checks = flags.enforce_checks,
            steps = plan.steps().len(),
            "Setup plan resolved"
        );

        let mut report = SetupReport {
            flags,
            executed: Vec::with_capacity(plan.steps().len()),
            removed: Vec::new(),
            verification: VerificationOutcome::Passed,
        };

        for step in plan.steps() {
            debug!(step = step.label(), "Starting step");
            match step {
                SetupStep::NormalizeSettings { path } => {
                    debug!(path = %path.display(), "Already normalized");
                }
                SetupStep::InitializeRepository { commands } => {
                    reporter.announce(notices::GIT_SETUP_BANNER);
                    reporter.announce(notices::GPG_HINT);
                    self.run_all(commands)?;
                }
                SetupStep::RemoveVcsFiles { paths } => {
                    reporter.announce(notices::NO_GIT_BANNER);
                    report.removed = self.remove_vcs_files(paths)?;
                }
                SetupStep::InstallDependencies { commands } => {
                    self.run_all(commands)?;
                }
                SetupStep::InstallHooks { command } => {
                    self.run_one(command)?;
                }
                SetupStep::Verify { command, policy } => {
                    reporter.announce(notices::VERIFY_BANNER);
                    report.verification = self.verify(command, *policy, reporter)?;
                }
                SetupStep::PrintNotices => print_notices(reporter),
            }
            report.executed.push(step.label());
        }

        info!("Setup completed successfully");
        Ok(report)
    }

    /// Delete each path that exists; absent paths are skipped.
    ///
    /// Returns the paths that were actually removed.
    pub fn remove_vcs_files(&self, paths: &[PathBuf]) -> SproutResult<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for path in paths {
            if !self.filesystem.exists(path) {
                debug!(path = %path.display(), "Not present, skipping");
                continue;
            }
            if self.filesystem.is_file(path) {
                self.filesystem.remove_file(path)?;
            } else {
                self.filesystem.remove_dir_all(path)?;
            }
            info!(path = %path.display(), "Removed repository-only file");
            removed.push(path.clone());
        }
        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn build_plan(
        &self,
        settings: &SettingsDocument,
        project_root: &Path,
        settings_path: &Path,
    ) -> SproutResult<SetupPlan> {
        self.toolchain.validate()?;
        let flags = SetupFlags::from_settings(settings)?;
        Ok(SetupPlan::build(
            flags,
            &self.toolchain,
            project_root,
            settings_path,
        ))
    }

    fn run_all(&self, commands: &[CommandSpec]) -> SproutResult<()> {
        commands.iter().try_for_each(|c| self.run_one(c))
    }

    fn run_one(&self, command: &CommandSpec) -> SproutResult<()> {
        info!(command = %command, "Running");
        self.runner.run(command)
    }

    /// Run the verifier and apply `policy` to the result.
    fn verify(
        &self,
        command: &CommandSpec,
        policy: VerificationPolicy,
        reporter: &dyn ProgressReporter,
    ) -> SproutResult<VerificationOutcome> {
        let err = match self.run_one(command) {
            Ok(()) => return Ok(VerificationOutcome::Passed),
            Err(err) if is_command_failure(&err) => err,
            Err(other) => return Err(other),
        };

        reporter.warn(notices::VERIFIER_UNAVAILABLE);
        if policy.is_enforced() {
            return Err(ApplicationError::VerificationFailed {
                command: command.to_string(),
                reason: err.to_string(),
            }
            .into());
        }

        warn!(error = %err, "Verification failed, continuing");
        reporter.warn(notices::CONTINUING_WITHOUT_VERIFICATION);
        Ok(VerificationOutcome::Skipped {
            reason: err.to_string(),
        })
    }
}

fn is_command_failure(err: &SproutError) -> bool {
    err.is_tool_unavailable()
        || matches!(
            err,
            SproutError::Application(ApplicationError::CommandFailed { .. })
        )
}

/// Emit the manual follow-up steps, preceded by a blank line.
pub fn print_notices(reporter: &dyn ProgressReporter) {
    reporter.notice("");
    for line in notices::FOLLOW_UP {
        reporter.notice(line);
    }
}
