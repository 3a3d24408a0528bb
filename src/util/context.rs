//! Global context for xcsummary operations.
//!
//! Provides centralized access to configuration, paths, and environment.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::ops::locate::{find_project, LocateError};
use crate::util::config::{load_config, Config, PROJECT_CONFIG_FILE};
use crate::util::fs::absolutize;

/// Project directories for xcsummary
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("", "", "xcsummary"));

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Global configuration file, if a config directory is known
    global_config: Option<PathBuf>,

    /// Merged configuration
    config: Config,
}

impl GlobalContext {
    /// Create a new GlobalContext rooted at the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let global_config = PROJECT_DIRS
            .as_ref()
            .map(|dirs| dirs.config_dir().join("config.toml"));
        let config = load_config(global_config.as_deref(), &cwd.join(PROJECT_CONFIG_FILE));

        GlobalContext {
            cwd,
            global_config,
            config,
        }
    }

    /// Replace the global config file and reload configuration.
    pub fn with_global_config(mut self, path: PathBuf) -> Self {
        self.config = load_config(Some(&path), &self.project_config_path());
        self.global_config = Some(path);
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the global configuration file path.
    pub fn global_config_path(&self) -> Option<&Path> {
        self.global_config.as_deref()
    }

    /// Get the project configuration file path.
    pub fn project_config_path(&self) -> PathBuf {
        self.cwd.join(PROJECT_CONFIG_FILE)
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find the single `.xcodeproj` in the working directory.
    pub fn find_project(&self) -> Result<PathBuf, LocateError> {
        find_project(&self.cwd)
    }

    /// Resolve the project to operate on: `path` if given (relative to the
    /// working directory), otherwise the one found in the working directory.
    pub fn resolve_project(&self, path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(absolutize(&self.cwd, path)),
            None => self.find_project().map_err(|e| match e {
                LocateError::NotFound { .. } => anyhow::anyhow!(
                    "{}\nhelp: Run from a directory containing an .xcodeproj or pass its path",
                    e
                ),
                other => other.into(),
            }),
        }
    }
}
