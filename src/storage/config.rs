//! Application configuration.
//!
//! The config names the packages to report on and how to report them.
//! Formula constants are fixed and not part of it.

use crate::metrics::report::{OutputFormat, ReportOptions};
use crate::sensors::package::{sample_packages, SensorPackage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output line format
    pub format: OutputFormat,
    /// Skip failing packages instead of aborting
    pub keep_going: bool,
    /// Packages to process, in order
    pub packages: Vec<SensorPackage>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            keep_going: false,
            packages: sample_packages(),
        }
    }
}

impl AppConfig {
    /// Report options derived from this config.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: self.format,
            keep_going: self.keep_going,
        }
    }
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fitness-tracker", "FitnessTracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("workouts.toml")
}

/// Load configuration from `path`, or from the default location.
///
/// An explicit path must exist. When no path is given and the default file
/// is absent, the built-in sample config is returned.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = get_config_path();
            if !default_path.exists() {
                tracing::debug!(path = %default_path.display(), "No config file, using sample packages");
                return Ok(AppConfig::default());
            }
            default_path
        }
    };

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;
    let config = parse_config(&content)?;

    tracing::info!(
        path = %path.display(),
        packages = config.packages.len(),
        "Loaded configuration"
    );
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to `path`.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
