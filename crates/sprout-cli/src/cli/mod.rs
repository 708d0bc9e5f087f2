//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Post-generation setup for freshly scaffolded projects",
    long_about = "Sprout runs once inside a newly generated project: it normalizes the \
                  settings document, initializes git (or strips git-only files), installs \
                  dependencies, optionally installs commit hooks, verifies the project \
                  and prints the remaining manual steps.",
    after_help = "EXAMPLES:\n\
        \x20 sprout run\n\
        \x20 sprout run --project-dir ./my-service\n\
        \x20 sprout plan --output-format json\n\
        \x20 sprout completions bash > /usr/share/bash-completion/completions/sprout",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full setup sequence.
    #[command(
        about = "Set up a generated project",
        after_help = "EXAMPLES:\n\
            \x20 sprout run\n\
            \x20 sprout run --project-dir ../my-service --settings .cookiecutter.json"
    )]
    Run(ProjectArgs),

    /// Show what `run` would do without doing it.
    #[command(
        visible_alias = "dry-run",
        about = "Print the setup steps without executing them"
    )]
    Plan(ProjectArgs),

    /// Print the manual follow-up steps.
    #[command(about = "Print follow-up instructions")]
    Notices,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Sprout configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprout config get tools.package_manager\n\
            \x20 sprout config list\n\
            \x20 sprout config init"
    )]
    Config(ConfigCommands),
}

// ── run / plan ────────────────────────────────────────────────────────────────

/// Location of the project to set up.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Root of the generated project.
    #[arg(
        short = 'C',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Project root (default: current directory)"
    )]
    pub project_dir: PathBuf,

    /// Settings document, relative to the project root.
    #[arg(
        short = 's',
        long = "settings",
        value_name = "FILE",
        help = "Settings document (default: .cookiecutter.json)"
    )]
    pub settings: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `tools.git`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write the built-in defaults to the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
