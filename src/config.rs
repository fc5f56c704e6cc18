//! Configuration file (`taskdeck.toml`).
//!
//! Every section and key is optional; missing values take their defaults.

use crate::constants::{API_URL_ENV, CONFIG_GENERATED, DEFAULT_API_BASE_URL};
use crate::ui::routes::Route;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the project/task service, without the `/api` suffix
    pub base_url: String,
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory holding the session file (empty = platform data directory)
    pub directory: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Route opened on startup, e.g. "/projects" or "/projects/3/tasks"
    pub start_route: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_route: "/projects".to_string(),
            mouse_enabled: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.level.parse().ok()
    }
}

impl Config {
    /// Loads the first config file found, falling back to defaults.
    /// `TASKDECK_API_URL` overrides the service URL either way.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Loads `path` when given, otherwise searches the default locations,
    /// then applies the environment override.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let found = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::config_candidates().into_iter().find(|path| path.exists()),
        };
        let mut config = match found {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Applies `TASKDECK_API_URL`, if set, and revalidates.
    pub fn apply_env(&mut self) -> Result<()> {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                log::debug!("Using {} from {}", url, API_URL_ENV);
                self.api.base_url = url;
                self.validate()
            }
            _ => Ok(()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// `./taskdeck.toml`, then `<config dir>/taskdeck/config.toml`.
    fn config_candidates() -> Vec<PathBuf> {
        let mut candidates = vec![PathBuf::from("taskdeck.toml")];
        candidates.extend(Self::get_default_config_path().ok());
        candidates
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        if self.logging.level_filter().is_none() {
            anyhow::bail!(
                "Invalid logging level '{}', expected one of error, warn, info, debug, trace",
                self.logging.level
            );
        }

        // Unknown paths fall back to Home when navigating; in config that is a typo.
        if Route::parse(&self.ui.start_route) == Route::Home && self.ui.start_route.trim_end_matches('/') != "" {
            anyhow::bail!("Unknown ui.start_route '{}'", self.ui.start_route);
        }

        Ok(())
    }

    /// Start route as a typed [`Route`]
    pub fn start_route(&self) -> Route {
        Route::parse(&self.ui.start_route)
    }

    /// Directory holding the persisted session
    pub fn session_dir(&self) -> Result<PathBuf> {
        if !self.session.directory.is_empty() {
            return Ok(PathBuf::from(&self.session.directory));
        }
        Self::get_data_dir()
    }

    /// Writes the defaults, with a header comment, to `path`.
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let content = format!(
            "# taskdeck configuration\n# Generated on {}\n\n{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            body
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        std::fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("taskdeck"))
    }

    /// Where `--generate-config` writes when no path is given
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }

    /// Platform data directory for the session file and logs
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("taskdeck"))
    }
}
