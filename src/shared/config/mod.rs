//! Application configuration module
//!
//! Provides configuration types for the application. Values may come from a
//! builder or from a TOML file:
//!
//! ```toml
//! server_url = "http://localhost:3000"
//! error_display_secs = 5
//! storage_path = "/tmp/bookstore/local_storage.json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Base URL of the bookstore backend
    pub server_url: Option<String>,
    /// How long login field errors stay visible
    pub error_display_secs: Option<u64>,
    /// File backing the local key/value store
    pub storage_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            let parsed =
                reqwest::Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.clone()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.error_display_secs == Some(0) {
            return Err(ConfigError::MissingValue("error_display_secs"));
        }
        Ok(())
    }

    /// Fill unset values from `other`
    pub fn merge(self, other: AppConfig) -> AppConfig {
        AppConfig {
            server_url: self.server_url.or(other.server_url),
            error_display_secs: self.error_display_secs.or(other.error_display_secs),
            storage_path: self.storage_path.or(other.storage_path),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    error_display_secs: Option<u64>,
    storage_path: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set how long login field errors stay visible
    pub fn error_display_secs(mut self, secs: u64) -> Self {
        self.error_display_secs = Some(secs);
        self
    }

    /// Set the local storage file
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            error_display_secs: self.error_display_secs,
            storage_path: self.storage_path,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
