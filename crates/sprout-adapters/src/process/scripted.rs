//! Scripted process runner for testing.

use std::sync::{Arc, Mutex};

use sprout_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::SproutResult,
};

/// What a scripted command does instead of running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedFailure {
    /// Exit with the given non-zero code.
    Exit(i32),
    /// Behave as if the program were not installed.
    Missing,
}

/// Runner that records every command and never spawns anything.
///
/// Commands succeed unless a rule matches: a rule fires when its needle
/// equals the program name or any argument.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<ScriptedRunnerInner>>,
}

#[derive(Debug, Default)]
struct ScriptedRunnerInner {
    rules: Vec<(String, ScriptedFailure)>,
    history: Vec<CommandSpec>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands mentioning `needle` fail with `failure`.
    pub fn fail_when(self, needle: impl Into<String>, failure: ScriptedFailure) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.rules.push((needle.into(), failure));
        }
        self
    }

    /// Rendered commands in the order they were run.
    pub fn history(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.history.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Raw command specs in the order they were run.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.inner
            .lock()
            .map(|inner| inner.history.clone())
            .unwrap_or_default()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec) -> SproutResult<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.history.push(command.clone());

        let matched = inner
            .rules
            .iter()
            .find(|(needle, _)| command.program() == needle || command.has_arg(needle))
            .map(|(_, failure)| *failure);

        match matched {
            None => Ok(()),
            Some(ScriptedFailure::Exit(code)) => Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: Some(code),
            }
            .into()),
            Some(ScriptedFailure::Missing) => Err(ApplicationError::CommandNotFound {
                program: command.program().to_owned(),
            }
            .into()),
        }
    }
}
