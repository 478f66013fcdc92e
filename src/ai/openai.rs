//! OpenAI-compatible chat completion provider (`/v1/chat/completions`)
//!
//! All wire types are private to this module — callers only ever see the
//! [`AiProvider`] capability. One round-trip per call: no retry, no
//! streaming, no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::AiProvider;
use crate::core::AiError;

/// Adapter for any HTTP endpoint implementing `/v1/chat/completions`.
///
/// Covers OpenAI and compatible local servers. Constructed once at
/// startup, then cheaply cloned — `reqwest::Client` is an `Arc`
/// internally.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl OpenAiProvider {
    /// Build a provider from config values.
    ///
    /// The key is sent as `Authorization: Bearer <key>` on every request.
    pub fn new(api_url: String, model: String, api_key: String) -> Result<Self, AiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AiError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url,
            model,
            api_key,
        })
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        debug!(model = %payload.model, prompt_len = prompt.len(), "sending chat completion request");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.api_url, error = %e, "chat completion transport failure");
                AiError::Request(e.to_string())
            })?;

        let response = check_status(response).await?;

        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| AiError::Request(format!("failed to parse response body: {e}")))?;

        debug!(choices = parsed.choices.len(), "received chat completion response");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AiError::Request("empty or missing content in response".into()))
    }
}

// =============================================================================
// Private wire types
// =============================================================================

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// Error envelope used by OpenAI and compatible APIs.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Consume the response and return it if successful, or a structured error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => format!("HTTP {status}: {}", envelope.error.message),
        Err(_) => format!("HTTP {status}: {body}"),
    };

    error!(%status, "chat completion returned HTTP error");
    Err(AiError::Request(message))
}
