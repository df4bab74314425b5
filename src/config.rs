//! Configuration parser
//!
//! Parses `speedo.toml` into structured settings.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "speedo.toml";

/// Settings for saving reports to the log folder
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogSection {
    /// Save every printed report (default: false)
    #[serde(default)]
    pub save: bool,
    /// Home directory for the log folder; `$HOME` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<PathBuf>,
}

/// Top-level configuration parsed from speedo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeedoConfig {
    /// Log persistence settings
    #[serde(default)]
    pub log: LogSection,
}

impl SpeedoConfig {
    /// Parse a speedo.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Load the config at `path`, falling back to defaults if the file does not exist
    pub fn from_path_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse speedo.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse speedo.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve where logs go: `home_override`, then the configured home, then `$HOME`
    pub fn log_config(&self, home_override: Option<&Path>) -> Result<LogConfig> {
        match home_override.or(self.log.home.as_deref()) {
            Some(home) => Ok(LogConfig::new(home)),
            None => LogConfig::from_env(),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if let Some(home) = &self.log.home {
            if home.as_os_str().is_empty() {
                bail!("log.home cannot be empty");
            }
        }

        Ok(())
    }
}
