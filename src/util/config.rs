//! Configuration file support for xcsummary.
//!
//! Two configuration file locations are read:
//! - Global: `<config dir>/xcsummary/config.toml` - User-wide defaults
//! - Project: `.xcsummary.toml` in the working directory
//!
//! Project config takes precedence over global config, and command-line
//! flags take precedence over both.
//!
//! ```toml
//! [output]
//! format = "json"
//! pretty = false
//! color = "never"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::util::fs::read_to_string;
use crate::util::shell::ColorChoice;

/// File name of the project-level config.
pub const PROJECT_CONFIG_FILE: &str = ".xcsummary.toml";

/// xcsummary configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
}

/// How results are printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format (default: human)
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (default: true)
    pub pretty: Option<bool>,

    /// Color for status lines (default: auto)
    pub color: Option<ColorChoice>,
}

/// Result output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "invalid output format '{}'; expected 'human' or 'json'",
                s
            )),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.pretty.is_some() {
            self.output.pretty = other.output.pretty;
        }
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
    }

    /// Effective output format.
    pub fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    /// Whether JSON output is pretty-printed.
    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(true)
    }

    /// Effective color choice.
    pub fn color(&self) -> ColorChoice {
        self.output.color.unwrap_or_default()
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (`.xcsummary.toml`)
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}
