//! # Configuration Management Module
//!
//! Client configuration is a small TOML file with three sections:
//!
//! - [`ServerConfig`] - where the game server lives and how to reach it
//! - [`ViewConfig`] - page sizes, selection limit, capacity thresholds, notice lifetime
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wandview::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("wandview.toml").await?;
//!     println!("Server: {}", config.server.base_url);
//!     Config::create_default("wandview.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [server]
//! base_url = "http://127.0.0.1:5000"
//! session_cookie = "session=..."
//!
//! [view]
//! spells_page_size = 6
//! max_selected_skills = 3
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section and field has a default, so an empty file is a valid configuration.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::fs;

use crate::error::ViewError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the game server, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Raw `Cookie` header value carrying an existing game session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
    /// Per-request timeout. Unset means requests wait for as long as the server takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_cookie: None,
            timeout_seconds: None,
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub spells_page_size: usize,
    pub skills_page_size: usize,
    pub max_selected_skills: usize,
    /// Slots shown in the capacity widget (`n/capacity`).
    pub inventory_capacity: u32,
    /// Capacity counter turns from `good` to `warning` at this many items.
    pub capacity_warning_at: u32,
    pub event_message_ttl_ms: u64,
    /// Container opened by the container panel when none is named.
    pub default_container: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            spells_page_size: 6,
            skills_page_size: 6,
            max_selected_skills: 3,
            inventory_capacity: 10,
            capacity_warning_at: 8,
            event_message_ttl_ms: 3000,
            default_container: "trunk".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn event_message_ttl(&self) -> Duration {
        Duration::from_millis(self.event_message_ttl_ms)
    }

    pub fn validate(&self) -> Result<(), ViewError> {
        if self.spells_page_size == 0 || self.skills_page_size == 0 {
            return Err(ViewError::Config("page sizes must be at least 1".into()));
        }
        if self.max_selected_skills == 0 {
            return Err(ViewError::Config(
                "max_selected_skills must be at least 1".into(),
            ));
        }
        if self.default_container.is_empty() {
            return Err(ViewError::Config("default_container cannot be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level, falling back to `Info` on unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config
            .view
            .validate()
            .map_err(|e| anyhow!("Invalid config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.view.spells_page_size, 6);
        assert_eq!(config.view.max_selected_skills, 3);
        assert_eq!(config.view.event_message_ttl(), Duration::from_millis(3000));
        assert_eq!(config.server.timeout(), None);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn partial_view_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [view]
            spells_page_size = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.view.spells_page_size, 4);
        assert_eq!(config.view.skills_page_size, 6);
        assert_eq!(config.view.default_container, "trunk");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let view = ViewConfig {
            skills_page_size: 0,
            ..ViewConfig::default()
        };
        assert!(view.validate().is_err());
        assert!(ViewConfig::default().validate().is_ok());
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "chatty".into(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
    }

    #[tokio::test]
    async fn default_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wandview.toml");
        let path = path.to_str().expect("utf-8 path");
        Config::create_default(path).await.expect("write default");
        let loaded = Config::load(path).await.expect("load default");
        assert_eq!(loaded.server.base_url, ServerConfig::default().base_url);
        assert_eq!(loaded.view.inventory_capacity, 10);
    }

    #[test]
    fn invalid_view_section_fails_to_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[view]\nmax_selected_skills = 0\n").expect("write");
        let err = tokio_test::block_on(Config::load(path.to_str().expect("utf-8 path")))
            .expect_err("zero selection limit");
        assert!(err.to_string().contains("max_selected_skills"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = tokio_test::block_on(Config::load("/nonexistent/wandview.toml"))
            .expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/wandview.toml"));
    }
}
