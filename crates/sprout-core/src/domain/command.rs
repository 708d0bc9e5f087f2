//! External command descriptions.
//!
//! A [`CommandSpec`] is a value: building one never spawns anything. The
//! `CommandRunner` port decides how (and whether) it is executed.

use std::fmt;
use std::path::{Path, PathBuf};

/// A program invocation with its arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command from `dir` instead of the caller's working directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// `true` if any argument equals `needle`.
    pub fn has_arg(&self, needle: &str) -> bool {
        self.args.iter().any(|a| a == needle)
    }
}

impl fmt::Display for CommandSpec {
    /// Shell-like rendering, for logs and error messages only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_args_in_order() {
        let cmd = CommandSpec::new("git").arg("init").args(["-q", "-b", "master"]);
        assert_eq!(cmd.program(), "git");
        assert_eq!(cmd.get_args(), ["init", "-q", "-b", "master"]);
        assert!(cmd.cwd().is_none());
    }

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = CommandSpec::new("nox").args(["-k", "not safety and not docs"]);
        assert_eq!(cmd.to_string(), "nox -k \"not safety and not docs\"");
    }

    #[test]
    fn current_dir_is_recorded() {
        let cmd = CommandSpec::new("poetry").current_dir("/tmp/project");
        assert_eq!(cmd.cwd(), Some(Path::new("/tmp/project")));
    }
}
