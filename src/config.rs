//! Configuration management for barboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_TIMEOUT_DEFAULT_SECS, API_TIMEOUT_MAX_SECS, API_URL_ENV, CONFIG_GENERATED, DEFAULT_API_BASE_URL,
};
use crate::routes::Route;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Events service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the REST paths (`/events`, `/bars`, ...) are appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Route opened on startup: "/", "/create", "/edit/<id>" or "/statistics"
    pub start_route: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show event descriptions on cards
    pub show_descriptions: bool,
    /// Show the event status reported by the service
    pub show_status: bool,
    /// Append a relative hint ("tomorrow", "in 3 days") after event dates
    pub show_relative_dates: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write the diagnostic log to a file as well as the in-app log view
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: API_TIMEOUT_DEFAULT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_route: Route::EventList.path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
            show_status: false,
            show_relative_dates: false,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(base_url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(base_url)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the API base URL (from the environment) and re-validate
    pub fn apply_api_url_override(&mut self, base_url: String) -> Result<()> {
        self.api.base_url = base_url;
        self.validate()
            .with_context(|| format!("Invalid {} override", API_URL_ENV))
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("barboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("barboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = reqwest::Url::parse(&self.api.base_url) {
            anyhow::bail!("Invalid api.base_url '{}': {}", self.api.base_url, e);
        }

        if self.api.timeout_secs == 0 || self.api.timeout_secs > API_TIMEOUT_MAX_SECS {
            anyhow::bail!(
                "api.timeout_secs must be between 1 and {}, got {}",
                API_TIMEOUT_MAX_SECS,
                self.api.timeout_secs
            );
        }

        if let Err(e) = Route::parse(&self.ui.start_route) {
            anyhow::bail!("Invalid ui.start_route '{}': {}", self.ui.start_route, e);
        }

        Ok(())
    }

    /// Route to open on startup. Falls back to the event list if unparseable.
    pub fn start_route(&self) -> Route {
        Route::parse(&self.ui.start_route).unwrap_or_default()
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# barboard configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format(crate::utils::datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("barboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
