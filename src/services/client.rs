//! HTTP client service
//!
//! Sends a single chat completion request and classifies the response

use crate::config::AppConfig;
use crate::models::CompletionRequest;
use crate::services::classifier::{classify, Outcome};
use crate::utils::error::InvocationError;
use crate::utils::logging::create_request_log_summary;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat completion client
#[derive(Debug, Clone)]
pub struct CompletionClient {
    client: Client,
}

impl CompletionClient {
    /// Create a new client instance
    pub fn new(timeout: Duration) -> Result<Self, InvocationError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("llmcli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(InvocationError::ClientSetup)?;

        Ok(Self { client })
    }

    /// Create a client using the timeout from the configuration file
    pub fn from_config(config: &AppConfig) -> Result<Self, InvocationError> {
        Self::new(config.timeout())
    }

    /// Send one prompt and return the first choice's content verbatim
    ///
    /// `model` must already be alias-resolved. Exactly one request is sent,
    /// nothing is retried.
    pub async fn invoke(
        &self,
        endpoint: &str,
        credential: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, InvocationError> {
        let request = CompletionRequest::single_turn(model, prompt);

        debug!(
            "Sending chat completion request: {}",
            create_request_log_summary(&request)
        );

        let response = self
            .client
            .post(endpoint)
            .header("Authorization", format!("Bearer {}", credential))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Chat completion request failed: {}", e);
                e
            })?;

        let status = response.status();
        let body = response.text().await?;

        debug!("Received response with status {} ({} bytes)", status, body.len());

        resolve(status.as_u16(), status.is_success(), body)
    }

    /// Invoke using endpoint and credential from the configuration
    pub async fn invoke_with_config(
        &self,
        config: &AppConfig,
        model: &str,
        prompt: &str,
    ) -> Result<String, InvocationError> {
        self.invoke(&config.endpoint, &config.credential, model, prompt)
            .await
    }
}

/// Combine HTTP status and classified body into the invocation result
///
/// An API error envelope wins over the status; a non-2xx status wins over any
/// other body.
fn resolve(status: u16, success: bool, body: String) -> Result<String, InvocationError> {
    match classify(&body) {
        Ok(Outcome::ApiError { code, message, explanation }) => {
            error!("API error {} (HTTP {}): {}", code, status, message);
            Err(InvocationError::Api { code, message, explanation })
        }
        _ if !success => {
            error!("Chat completion request failed with HTTP {}", status);
            Err(InvocationError::HttpStatus { status, body })
        }
        Ok(outcome) => {
            info!("Chat completion request completed");
            outcome.into_result()
        }
        Err(e) => {
            error!("Failed to decode response body: {}", e);
            Err(e)
        }
    }
}
