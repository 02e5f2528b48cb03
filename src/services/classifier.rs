//! Response classifier
//!
//! Turns a raw response body into exactly one outcome. The error envelope is
//! tried before the success envelope: both share the same outer object and
//! differ only by which fields are present.

use crate::models::{CompletionResponse, ErrorEnvelope};
use crate::utils::error::InvocationError;
use tracing::debug;

/// Classified response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Content of the first choice
    Success(String),
    /// Upstream error with its fixed explanation (empty when unknown)
    ApiError {
        code: i64,
        message: String,
        explanation: &'static str,
    },
    /// Success envelope with no choices
    Empty,
}

impl Outcome {
    /// Convert into the invocation result
    pub fn into_result(self) -> Result<String, InvocationError> {
        match self {
            Outcome::Success(text) => Ok(text),
            Outcome::ApiError { code, message, explanation } => Err(InvocationError::Api {
                code,
                message,
                explanation,
            }),
            Outcome::Empty => Err(InvocationError::EmptyChoices),
        }
    }
}

/// Fixed explanation for a known API error code, empty string otherwise
pub fn explain(code: i64) -> &'static str {
    match code {
        400 => "Bad Request (invalid or missing params, CORS)",
        401 => "Invalid credentials (OAuth session expired, disabled/invalid API key)",
        402 => "Your account or API key has insufficient credits. Add more credits and retry the request.",
        403 => "Your chosen model requires moderation and your input was flagged",
        408 => "Your request timed out",
        429 => "You are being rate limited",
        502 => "Your chosen model is down or we received an invalid response from it",
        503 => "There is no available model provider that meets your routing requirements",
        _ => "",
    }
}

/// Classify a raw response body
///
/// Returns `InvocationError::MalformedBody` when the body decodes as neither
/// envelope.
pub fn classify(raw: &str) -> Result<Outcome, InvocationError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(raw) {
        if envelope.error.code != 0 {
            debug!("Response classified as API error {}", envelope.error.code);
            return Ok(Outcome::ApiError {
                code: envelope.error.code,
                message: envelope.error.message,
                explanation: explain(envelope.error.code),
            });
        }
    }

    let response: CompletionResponse = serde_json::from_str(raw)?;

    match response.first_content() {
        Some(text) => Ok(Outcome::Success(text.to_string())),
        None => {
            debug!("Response classified as empty");
            Ok(Outcome::Empty)
        }
    }
}
