//! Router configuration.
//!
//! Everything has a default, so an empty TOML document is a valid config.
//!
//! ```toml
//! store_buffer_size = 64
//! download_format = "zip"
//! validate_segments = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading a [`RouterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Capacity of the store actor's request queue.
    pub store_buffer_size: usize,
    /// Archive format handed to the store on `download`.
    pub download_format: String,
    /// Reject leaves whose parent path or name is empty before any other check.
    pub validate_segments: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            store_buffer_size: 32,
            download_format: "zip".into(),
            validate_segments: false,
        }
    }
}

impl RouterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer_size == 0 {
            return Err(ConfigError::Invalid("store_buffer_size must be positive".into()));
        }
        if self.download_format.is_empty() {
            return Err(ConfigError::Invalid("download_format must not be empty".into()));
        }
        Ok(())
    }
}
