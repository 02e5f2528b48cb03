//! Chat completion data models
//!
//! Defines the request and response envelopes exchanged with an
//! OpenAI-compatible chat completions endpoint

use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Prompt written by the user
    User,
    /// Answer produced by the model
    Assistant,
    /// System instructions
    System,
    /// Any role this client does not know about
    #[serde(untagged)]
    Other(String),
}

/// Single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the author
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Chat completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Provider model identifier
    pub model: String,
    /// Ordered message list
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Build a single-turn request holding one user message
    pub fn single_turn(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}

/// Chat completion success envelope
///
/// Only `choices` is required; every other upstream field (`id`, `usage`, ...)
/// is ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Choice list, only the first entry is consulted
    pub choices: Vec<Choice>,
}

/// One completion choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Generated message
    pub message: ChatMessage,
}

impl CompletionResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}

/// Chat completion error envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Error payload
    pub error: ApiErrorBody,
}

/// Upstream API error payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Numeric error code, usually mirrors the HTTP status
    pub code: i64,
    /// Human readable message
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_turn_request_shape() {
        let request = CompletionRequest::single_turn("vendor/model-x", "Hello there");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "model": "vendor/model-x",
                "messages": [{"role": "user", "content": "Hello there"}]
            })
        );
    }

    #[test]
    fn test_unknown_role_is_preserved() {
        let message: ChatMessage =
            serde_json::from_str(r#"{"role":"tool","content":"x"}"#).unwrap();
        assert_eq!(message.role, Role::Other("tool".to_string()));
    }

    #[test]
    fn test_first_content() {
        let response: CompletionResponse = serde_json::from_str(
            r#"{"id":"gen-1","choices":[{"message":{"role":"assistant","content":"a"}},{"message":{"role":"assistant","content":"b"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_content(), Some("a"));

        let empty = CompletionResponse { choices: vec![] };
        assert_eq!(empty.first_content(), None);
    }
}
