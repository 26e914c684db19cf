//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::default_prefix;
use super::validation::ValidationError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config parsed but failed validation.
    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationError),
}

/// Layer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Chat-command configuration.
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        super::validation::validate(&config)?;
        Ok(config)
    }
}

/// Chat-command configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Prefix that marks a chat line as a command invocation (default: "/").
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}
