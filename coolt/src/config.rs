//! Configuration module for the coolt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the coolt application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use coolc_lex::LexerConfig;

use crate::commands::common::OutputFormat;
use crate::error::{CooltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "coolt.toml";

/// Application configuration structure.
///
/// ```toml
/// [lexer]
/// max_string_length = 1024
/// line_comments = false
///
/// [output]
/// format = "lines"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scanner options.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default rendering for `coolt lex`.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/coolt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::load_from_path(&path)
            },
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CooltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CooltError::Config(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    #[allow(dead_code)] // Used by tooling that writes a starter config
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CooltError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the lexer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.lexer.max_string_length == 0 {
            return Err(CooltError::Config(
                "lexer.max_string_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("coolt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("coolt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
