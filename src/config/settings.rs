//! Process settings
//!
//! Environment-derived settings that are needed before the configuration file
//! is read, currently only logging

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Process settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or env-filter directive
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Create a new settings instance from the environment
    pub fn new() -> Result<Self> {
        let settings = Self {
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "warn"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate().context("Invalid logging settings")?;

        Ok(settings)
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        // Directives such as "llmcli=debug" are accepted as-is
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !self.logging.level.contains('=')
            && !valid_levels.contains(&self.logging.level.to_lowercase().as_str())
        {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(level: &str, format: &str) -> Settings {
        Settings {
            logging: LoggingConfig {
                level: level.to_string(),
                format: format.to_string(),
            },
        }
    }

    #[test]
    fn test_validate() {
        assert!(settings("info", "text").validate().is_ok());
        assert!(settings("DEBUG", "json").validate().is_ok());
        assert!(settings("llmcli=debug,reqwest=warn", "text").validate().is_ok());
        assert!(settings("loud", "text").validate().is_err());
        assert!(settings("info", "xml").validate().is_err());
    }
}
