//! File-based configuration loading
//!
//! Loads credential, endpoint and model aliases from a TOML file, with
//! `LLMCLI_*` environment variables overriding scalar fields

use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable prefix for field overrides
pub const ENV_PREFIX: &str = "LLMCLI";

/// File name looked up in the default locations
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bearer token sent to the API
    pub credential: String,

    /// Full URL of the chat completions endpoint
    pub endpoint: String,

    /// Model used when none is given on the command line
    pub default_model: String,

    /// User-facing model name to provider model id
    #[serde(default)]
    pub model_alias: HashMap<String, String>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Read one override, treating an unset variable as absent
fn env_value<T: serde::de::DeserializeOwned>(
    env: &::config::Config,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match env.get::<T>(key) {
        Ok(value) => {
            debug!("Overriding '{}' from environment", key);
            Ok(Some(value))
        }
        Err(::config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ConfigError::Environment(e)),
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                searched: vec![path.to_path_buf()],
            });
        }

        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // Parsed directly so that table keys like model aliases keep their case
        let mut config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        debug!("Loaded {} model aliases", config.model_alias.len());
        Ok(config)
    }

    /// Override scalar fields from `LLMCLI_*` environment variables
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let env = ::config::Config::builder()
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(ConfigError::Environment)?;

        if let Some(credential) = env_value::<String>(&env, "credential")? {
            self.credential = credential;
        }
        if let Some(endpoint) = env_value::<String>(&env, "endpoint")? {
            self.endpoint = endpoint;
        }
        if let Some(default_model) = env_value::<String>(&env, "default_model")? {
            self.default_model = default_model;
        }
        if let Some(timeout_secs) = env_value::<u64>(&env, "timeout_secs")? {
            self.timeout_secs = timeout_secs;
        }
        Ok(())
    }

    /// Load configuration from default locations
    /// Searches in order:
    /// 1. ~/.config/llmcli/config.toml
    /// 2. ./config.toml
    pub fn load_default() -> Result<Self, ConfigError> {
        let candidates = Self::default_paths();

        match candidates.iter().find(|p| p.is_file()) {
            Some(path) => Self::load(path),
            None => Err(ConfigError::NotFound { searched: candidates }),
        }
    }

    /// Load from an explicit path when given, otherwise from default locations
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// Default configuration file locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("llmcli").join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.credential.is_empty() {
            return Err(ConfigError::Invalid("credential cannot be empty".to_string()));
        }

        if self.credential.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "credential cannot contain whitespace characters".to_string(),
            ));
        }

        if !self.endpoint.starts_with("http") {
            return Err(ConfigError::Invalid(format!(
                "Invalid endpoint URL, should start with 'http': {}",
                self.endpoint
            )));
        }

        if self.default_model.trim().is_empty() {
            return Err(ConfigError::Invalid("default_model cannot be empty".to_string()));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs cannot be 0".to_string()));
        }

        for (alias, target) in &self.model_alias {
            if target.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "model_alias '{}' maps to an empty model name",
                    alias
                )));
            }
        }

        Ok(())
    }

    /// Resolve the model to send upstream
    ///
    /// Falls back to `default_model` when nothing was requested, then replaces
    /// the name by its alias target on an exact key match.
    pub fn resolve_model(&self, requested: Option<&str>) -> String {
        let name = requested
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.default_model.as_str());

        match self.model_alias.get(name) {
            Some(target) => {
                debug!("Model alias '{}' resolved to '{}'", name, target);
                target.clone()
            }
            None => name.to_string(),
        }
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
