//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resolved
//! [`Toolchain`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SPROUT_` prefix, `__` between nested keys
//!    (e.g. `SPROUT_TOOLS__PACKAGE_MANAGER=uv`)
//! 3. Config file (`--config FILE`, else the platform config path)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sprout_core::domain::{SETTINGS_FILE_NAME, Toolchain};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "SPROUT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External programs driven during setup.
    pub tools: Toolchain,
    /// Output settings.
    pub output: OutputConfig,
    /// Where the settings document lives inside a project.
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// File name relative to the project root.
    pub file_name: PathBuf,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from(SETTINGS_FILE_NAME),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the platform config file is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed configuration defaults")?;

        config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sprout.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "sprout", "sprout")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sprout.toml"))
    }

    /// Absolute-or-relative path of the settings document for `project_dir`.
    pub fn settings_path(&self, project_dir: &Path, override_name: Option<&Path>) -> PathBuf {
        project_dir.join(override_name.unwrap_or(self.settings.file_name.as_path()))
    }
}
