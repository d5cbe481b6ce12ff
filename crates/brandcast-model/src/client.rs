//! HTTP client for the model completion endpoint.
//!
//! Wraps `reqwest` with timeouts, API-key handling, and typed envelope
//! deserialization. The wire contract is a single POST accepting
//! `{model, max_tokens, messages}` and returning `{content: [{text}]}`.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// Client for the model completion endpoint.
///
/// Use [`ModelClient::new`] for production or [`ModelClient::with_base_url`]
/// to point at a mock server in tests.
pub struct ModelClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl ModelClient {
    /// Creates a new client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ModelError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom endpoint URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandcast/0.1 (content-pipeline)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Submit one prompt and return the first text block of the response.
    ///
    /// Requests are issued strictly one at a time by callers; this method
    /// performs exactly one POST with no retry.
    ///
    /// # Errors
    ///
    /// - [`ModelError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ModelError::Parse`] if the response envelope is not the expected
    ///   shape.
    /// - [`ModelError::EmptyResponse`] if the envelope carries no text.
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ModelError> {
        let request = CompletionRequest {
            model: &self.model,
            max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let envelope: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| ModelError::Parse {
                context: "completion envelope".to_string(),
                source: e,
            })?;

        let text = envelope
            .content
            .into_iter()
            .map(|block| block.text)
            .find(|text| !text.is_empty())
            .ok_or(ModelError::EmptyResponse)?;

        tracing::debug!(chars = text.len(), "model response received");
        Ok(text)
    }
}
