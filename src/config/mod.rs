//
//  reporte-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the client's TOML configuration and resolves, once, the
//! base URL every request is sent to.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/reporte/config.toml`
//! - **macOS**: `~/Library/Application Support/reporte/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\reporte\config.toml`
//!
//! `REPORTE_CONFIG_DIR` replaces the directory.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! environment = "development"
//! platform = "android"
//! timeout_secs = 30
//! ```
//!
//! ## Base URL Resolution
//!
//! An explicit URL (command line or `REPORTE_API_URL`) wins, then
//! `api.base_url` from the file, then the environment/platform table in
//! [`target`].

mod file;
mod target;

pub use file::*;
pub use target::*;

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that replaces the configuration directory.
pub const CONFIG_DIR_ENV: &str = "REPORTE_CONFIG_DIR";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &["environment", "platform", "base_url", "timeout_secs"];

/// Global configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Settings for reaching the Reporte API.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Settings for reaching the Reporte API.
///
/// | Field | Default |
/// |-------|---------|
/// | `environment` | `production` |
/// | `platform` | `web` |
/// | `base_url` | `None` (derived from environment/platform) |
/// | `timeout_secs` | `30` |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub platform: Platform,

    /// Explicit base URL; wins over environment and platform.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            platform: Platform::default(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Resolves the base URL, preferring `explicit` when given.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reporte_client::config::{ApiConfig, Environment, Platform};
    ///
    /// let api = ApiConfig {
    ///     environment: Environment::Development,
    ///     platform: Platform::Web,
    ///     ..Default::default()
    /// };
    /// assert_eq!(api.resolve_base_url(None), "http://localhost:5000");
    /// assert_eq!(api.resolve_base_url(Some("http://x:1/")), "http://x:1");
    /// ```
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        let url = explicit
            .filter(|u| !u.trim().is_empty())
            .or(self.base_url.as_deref().filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| default_base_url(self.environment, self.platform));
        normalize_base_url(url)
    }
}

impl Config {
    /// Loads the configuration from the default location, or defaults when
    /// the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir).join("config.toml"));
            }
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "environment" => Some(self.api.environment.to_string()),
            "platform" => Some(self.api.platform.to_string()),
            "base_url" => self.api.base_url.clone(),
            "timeout_secs" => Some(self.api.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty `base_url` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "environment" => self.api.environment = value.parse()?,
            "platform" => self.api.platform = value.parse()?,
            "base_url" => {
                self.api.base_url = if value.trim().is_empty() {
                    None
                } else {
                    let normalized = normalize_base_url(value);
                    url::Url::parse(&normalized)
                        .with_context(|| format!("Invalid base URL: {}", value))?;
                    Some(normalized)
                }
            }
            "timeout_secs" => {
                self.api.timeout_secs = value
                    .parse()
                    .with_context(|| format!("timeout_secs must be a number, got {}", value))?
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (valid keys: {})",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_production() {
        let config = Config::default();
        assert_eq!(config.api.resolve_base_url(None), PRODUCTION_URL);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_explicit_url_wins() {
        let mut config = Config::default();
        config.set("base_url", "http://from-file:5000").unwrap();
        assert_eq!(config.api.resolve_base_url(None), "http://from-file:5000");
        assert_eq!(
            config.api.resolve_base_url(Some("http://flag:1")),
            "http://flag:1"
        );
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("environment", "dev").unwrap();
        config.set("platform", "android").unwrap();
        config.set("timeout_secs", "5").unwrap();

        assert_eq!(config.get("environment").as_deref(), Some("development"));
        assert_eq!(config.get("platform").as_deref(), Some("android"));
        assert_eq!(config.get("timeout_secs").as_deref(), Some("5"));
        assert_eq!(config.api.resolve_base_url(None), ANDROID_DEV_URL);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("timeout_secs", "soon").is_err());
        assert!(config.set("base_url", "not a url").is_err());
    }

    #[test]
    fn test_empty_base_url_clears() {
        let mut config = Config::default();
        config.set("base_url", "http://x").unwrap();
        config.set("base_url", "").unwrap();
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("environment", "development").unwrap();
        config.set("platform", "ios").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.api.resolve_base_url(None), IOS_DEV_URL);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let loaded: Config = toml::from_str("[api]\nplatform = \"android\"\n").unwrap();
        assert_eq!(loaded.api.platform, Platform::Android);
        assert_eq!(loaded.api.environment, Environment::Production);
        assert_eq!(loaded.api.timeout_secs, 30);
    }
}
