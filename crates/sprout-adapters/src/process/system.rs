//! Process runner backed by `std::process::Command`.

use std::io;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use sprout_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::{SproutError, SproutResult},
};

/// Production runner: spawns the program and waits for it.
///
/// Stdin is closed so tools cannot block on a prompt; stdout and stderr go
/// straight to the user's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    stdout_to_stderr: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the child's stdout to our stderr, keeping stdout free for a
    /// machine-readable document.
    pub fn with_stdout_to_stderr() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %command))]
    fn run(&self, command: &CommandSpec) -> SproutResult<()> {
        let mut process = Command::new(command.program());
        process
            .args(command.get_args())
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());
        if self.stdout_to_stderr {
            process.stdout(io::stderr());
        } else {
            process.stdout(Stdio::inherit());
        }
        if let Some(dir) = command.cwd() {
            process.current_dir(dir);
        }

        let status = process.status().map_err(|e| spawn_error(command, e))?;
        debug!(code = ?status.code(), "Process exited");

        if status.success() {
            Ok(())
        } else {
            Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            }
            .into())
        }
    }
}

fn spawn_error(command: &CommandSpec, e: io::Error) -> SproutError {
    // A missing working directory also surfaces as NotFound.
    let cwd_ok = command.cwd().is_none_or(|dir| dir.is_dir());
    if e.kind() == io::ErrorKind::NotFound && cwd_ok {
        ApplicationError::CommandNotFound {
            program: command.program().to_owned(),
        }
        .into()
    } else {
        ApplicationError::CommandSpawn {
            command: command.to_string(),
            reason: e.to_string(),
        }
        .into()
    }
}
