//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (PERF_PLUGIN_*)
//! 2. TOML config file (if PERF_PLUGIN_CONFIG_FILE set)
//! 3. Built-in defaults

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (PERF_PLUGIN_*)
/// 2. TOML config file (if PERF_PLUGIN_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name reported to the host during the MCP handshake.
    ///
    /// Set via PERF_PLUGIN_SERVER_NAME environment variable.
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Log filter directive used when RUST_LOG is not set.
    ///
    /// Set via PERF_PLUGIN_LOG_FILTER environment variable.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON log lines (true) or human-readable ones (false).
    ///
    /// Set via PERF_PLUGIN_LOG_JSON environment variable.
    #[serde(default = "default_true")]
    pub log_json: bool,
}

fn default_server_name() -> String {
    "perf-plugin".into()
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { server_name: default_server_name(), log_filter: default_log_filter(), log_json: true }
    }
}

impl AppConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Build the layered figment without extracting it.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("PERF_PLUGIN_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("PERF_PLUGIN_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
