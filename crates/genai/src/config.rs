//! Generation service configuration.

/// Configuration for the generation model service, passed explicitly into
/// [`crate::GenAiClient`] at construction time.
///
/// The API key is deliberately required with no default: a deployment
/// without credentials should fail at startup, not at first request.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// Bearer token for the generation API.
    pub api_key: String,
    /// Base URL of the chat-completion API (default:
    /// `https://api.openai.com/v1`).
    pub base_url: String,
    /// Model identifier to request (default: `gpt-4o-mini`).
    pub model: String,
    /// Timeout for the single generation attempt in seconds (default: `30`).
    pub timeout_secs: u64,
}

impl GenAiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                     |
    /// |----------------------|-----------------------------|
    /// | `GENAI_API_KEY`      | (required)                  |
    /// | `GENAI_BASE_URL`     | `https://api.openai.com/v1` |
    /// | `GENAI_MODEL`        | `gpt-4o-mini`               |
    /// | `GENAI_TIMEOUT_SECS` | `30`                        |
    ///
    /// # Panics
    ///
    /// Panics if `GENAI_API_KEY` is unset or `GENAI_TIMEOUT_SECS` is not a
    /// valid integer, so misconfiguration fails fast at startup.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GENAI_API_KEY").expect("GENAI_API_KEY must be set");

        let base_url = std::env::var("GENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());

        let model = std::env::var("GENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());

        let timeout_secs: u64 = std::env::var("GENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("GENAI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        }
    }
}
