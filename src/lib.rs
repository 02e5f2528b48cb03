//! LLM command-line client library
//!
//! Sends one prompt to an OpenAI-compatible chat completions endpoint and
//! renders the answer for a terminal

pub mod app;
pub mod cli;
pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{AppConfig, Settings};
pub use services::{classify, CompletionClient, Outcome};
pub use utils::error::{AppError, AppResult, ConfigError, InvocationError};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
