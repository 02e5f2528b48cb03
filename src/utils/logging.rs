//! Logging utilities
//!
//! Subscriber setup and helpers for logging requests without leaking prompts

use crate::config::settings::LoggingConfig;
use crate::models::CompletionRequest;

/// Set to true to include full prompts in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Maximum prompt characters kept in request summaries
const MAX_CONTENT_CHARS: usize = 200;

/// Initialize logging system
///
/// Logs go to stderr so that stdout only carries the completion.
pub fn init_logging(config: &LoggingConfig) {
    let result = if config.format == "json" {
        // JSON format logs
        tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .try_init()
    } else {
        // Human readable format
        tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", head, total - max_chars)
    } else {
        s.to_string()
    }
}

/// Create a filtered summary of a completion request for logging
/// Keeps original structure but truncates message content
pub fn create_request_log_summary(request: &CompletionRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::to_value(request).unwrap_or(serde_json::json!({"error": "serialize failed"}))
    } else {
        let messages: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role,
                    "content": truncate_content(&msg.content, MAX_CONTENT_CHARS),
                })
            })
            .collect();

        serde_json::json!({
            "model": request.model,
            "messages": messages,
        })
    }
}
