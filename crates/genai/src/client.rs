//! HTTP client for the chat-completion API.
//!
//! [`GenAiClient`] performs exactly one bounded-timeout request per
//! invocation -- no retries, no backoff. Any failure (transport, non-2xx,
//! undecodable body, content that is not JSON) is returned as a
//! [`GenAiError`] value for the caller to convert into its fallback path.

use serde::Deserialize;
use serde_json::Value;

use crate::config::GenAiConfig;

/// HTTP client for the generation model service.
pub struct GenAiClient {
    client: reqwest::Client,
    config: GenAiConfig,
}

/// Errors from the generation client.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered 2xx but the payload was not usable.
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),
}

/// Response body of the chat-completion endpoint, reduced to the fields
/// this client reads.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub(crate) choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub(crate) message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatMessage {
    pub(crate) content: String,
}

impl GenAiClient {
    /// Create a new client from explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed, which
    /// only happens on broken TLS setups; construction runs once at
    /// startup so this fails fast.
    pub fn new(config: GenAiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build generation HTTP client");

        Self { client, config }
    }

    /// Submit one generation request and decode the result as JSON.
    ///
    /// Sends a `POST {base_url}/chat/completions` with the given system
    /// and user messages, asking for a JSON-object response, then parses
    /// the first choice's message content. Exactly one attempt is made.
    pub async fn generate(&self, system: &str, user: &str) -> Result<Value, GenAiError> {
        let request_id = uuid::Uuid::new_v4();

        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
            "response_format": { "type": "json_object" },
        });

        tracing::debug!(
            %request_id,
            model = %self.config.model,
            "Submitting generation request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::debug!(%request_id, status = status.as_u16(), "Generation request rejected");
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        let value = decode_content(chat)?;

        tracing::debug!(%request_id, "Generation response decoded");
        Ok(value)
    }
}

/// Pull the first choice out of a chat response and parse its content as
/// JSON.
pub(crate) fn decode_content(response: ChatResponse) -> Result<Value, GenAiError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GenAiError::MalformedResponse("response contained no choices".into()))?;

    serde_json::from_str(&choice.message.content).map_err(|e| {
        GenAiError::MalformedResponse(format!("message content is not valid JSON: {e}"))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
