// File: src/config.rs
// Purpose: Validator configuration parsing from rusty-validate.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use rusty_validate_core::CUSTOM_MESSAGE;

/// Validator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Custom message lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesConfig {
    /// Field annotation holding the custom message (default: "custom_message")
    #[serde(default = "default_annotation")]
    pub annotation: String,
}

/// Rule engine settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    /// Report `label` annotations as field names
    #[serde(default)]
    pub use_labels: bool,

    /// Deadline applied to every validation, in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    /// Log each failure with its custom message at debug level
    #[serde(default)]
    pub log_failures: bool,
}

fn default_annotation() -> String {
    CUSTOM_MESSAGE.to_string()
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            annotation: default_annotation(),
        }
    }
}

impl EngineConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl ValidatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidatorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./rusty-validate.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-validate.toml")
    }
}
