//! Error handling module
//!
//! Defines the error types raised while loading configuration and invoking
//! the completion API, and how they map to process exit codes

use crate::utils::logging::truncate_content;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum response body characters shown in an HTTP status diagnostic
const MAX_BODY_CHARS: usize = 500;

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No configuration file at any searched location
    #[error("Configuration file not found, searched: {}", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    /// File exists but cannot be read
    #[error("Failed to read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML or a required field is missing
    #[error("Failed to parse configuration file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An `LLMCLI_*` override holds an unusable value
    #[error("Invalid environment override: {0}")]
    Environment(#[source] ::config::ConfigError),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure of a single completion invocation
#[derive(Error, Debug)]
pub enum InvocationError {
    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    /// DNS, connect, timeout or other network failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status with a body that is not an API error envelope
    #[error("HTTP request failed with status {status}: {}", truncate_content(.body, MAX_BODY_CHARS))]
    HttpStatus { status: u16, body: String },

    /// Body matches neither the success nor the error envelope
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Upstream rejected the request explicitly
    #[error("{}", format_api_error(.code, .message, .explanation))]
    Api {
        code: i64,
        message: String,
        explanation: &'static str,
    },

    /// Valid success envelope without any choice
    #[error("The API returned no choices")]
    EmptyChoices,
}

fn format_api_error(code: &i64, message: &str, explanation: &str) -> String {
    if explanation.is_empty() {
        format!("API error {}: {}", code, message)
    } else {
        format!("API error {}: {} ({})", code, message, explanation)
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The completion request failed
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}

impl AppError {
    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::Invocation(e) => match e {
                InvocationError::ClientSetup(_) => "client_setup_error",
                InvocationError::Transport(_) => "transport_error",
                InvocationError::HttpStatus { .. } => "http_status_error",
                InvocationError::MalformedBody(_) => "malformed_body",
                InvocationError::Api { .. } => "api_error",
                InvocationError::EmptyChoices => "empty_choices",
            },
        }
    }

    /// Get process exit code
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Invocation(e) => match e {
                InvocationError::Transport(_) => 3,
                InvocationError::HttpStatus { .. } => 4,
                InvocationError::MalformedBody(_) => 5,
                InvocationError::Api { .. } => 6,
                InvocationError::EmptyChoices => 7,
                InvocationError::ClientSetup(_) => 8,
            },
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
