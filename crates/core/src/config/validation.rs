//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `server_name` is empty or contains whitespace
    /// - `log_filter` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_name.is_empty() {
            return Err(ConfigError::Invalid { field: "server_name".into(), reason: "must not be empty".into() });
        }
        if self.server_name.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                field: "server_name".into(),
                reason: "must not contain whitespace".into(),
            });
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "log_filter".into(), reason: "must not be empty".into() });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_server_name() {
        let config = AppConfig { server_name: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "server_name"));
    }

    #[test]
    fn test_validate_server_name_whitespace() {
        let config = AppConfig { server_name: "perf plugin".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "server_name"));
    }

    #[test]
    fn test_validate_blank_log_filter() {
        let config = AppConfig { log_filter: "  ".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "log_filter"));
    }
}
