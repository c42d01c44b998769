//! Configuration module for the sonic CLI.
//!
//! Thin, optional settings read from a `sonic.toml` in the current
//! directory. Unlike a multi-project build tool, this CLI has no
//! project-wide settings worth a home/system-directory search chain —
//! cwd is the only place looked at.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CliError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "sonic.toml";

/// Output format selector, shared between the config file and `--format`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Human
    }
}

/// Application configuration for the sonic CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SonicConfig {
    /// Default output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Default color preference when `--no-color` is not given.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SonicConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}

impl SonicConfig {
    /// Loads `sonic.toml` from the current directory, or the default
    /// configuration if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Loads configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("failed to parse configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SonicConfig::default();
        assert_eq!(config.format, OutputFormat::Human);
        assert!(config.color);
    }

    #[test]
    fn test_load_from_path_parses_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sonic.toml");
        std::fs::write(&path, "format = \"json\"\ncolor = false\n").unwrap();

        let config = SonicConfig::load_from_path(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_load_from_nonexistent_path_is_an_error() {
        let result = SonicConfig::load_from_path(Path::new("/nonexistent/sonic.toml"));
        assert!(result.is_err());
    }
}
