use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the MLB Stats API. Should include the https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs are written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

/// Default base URL for the Stats API
fn default_api_domain() -> String {
    crate::constants::DEFAULT_API_DOMAIN.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file falls back to defaults; the Stats API has a
    /// public default domain, so no first-run setup is required.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `MLB_API_DOMAIN` - Override API domain
    /// - `MLB_LOG_FILE` - Override log file path
    /// - `MLB_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a specific file path without applying
    /// environment overrides.
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(config_path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies `MLB_*` environment variable overrides on top of whatever was
    /// loaded from disk.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var("MLB_API_DOMAIN") {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var("MLB_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("MLB_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_domain, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to a specific path, creating parent directories
    /// as needed. TOML format.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        let path = Path::new(config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(toml_str.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Prints the current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config = Config::load().await?;
        println!("Config file: {}", get_config_path());
        println!("API domain: {}", config.api_domain);
        match &config.log_file_path {
            Some(path) => println!("Log file: {path}"),
            None => println!("Log directory: {} (default)", paths::get_log_dir_path()),
        }
        println!("HTTP timeout: {}s", config.http_timeout_seconds);
        Ok(())
    }
}
