use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Default time a login field error stays visible
const DEFAULT_ERROR_DISPLAY_SECS: u64 = 5;

/// Directory name used under the platform config/data dirs
const APP_DIR: &str = "bookstore_admin";

/// Environment override for the backend URL
pub const SERVER_URL_ENV: &str = "BOOKSTORE_API_URL";

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const BOOK_PATH: &str = "/book";

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Resolve configuration from the environment, then the config file,
    /// then defaults. A missing config file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let mut env = AppConfig::default();
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            env.server_url = Some(url);
        }
        env.validate()?;

        let file = match Self::config_file() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading config file");
                AppConfig::load(&path)?
            }
            _ => AppConfig::default(),
        };

        Ok(Self {
            app: env.merge(file),
        })
    }

    /// `config.toml` in the platform config directory
    pub fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url().trim_end_matches('/'), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// How long login field errors stay on screen
    pub fn error_display(&self) -> Duration {
        Duration::from_secs(
            self.app
                .error_display_secs
                .unwrap_or(DEFAULT_ERROR_DISPLAY_SECS),
        )
    }

    /// File backing the local key/value store
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.app.storage_path {
            return path.clone();
        }
        dirs::data_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join(APP_DIR)
            .join("local_storage.json")
    }
}
