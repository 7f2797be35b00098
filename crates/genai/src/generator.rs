//! The seam between HTTP handlers and the generation service.

use async_trait::async_trait;
use serde_json::Value;

use crate::client::{GenAiClient, GenAiError};

/// A source of structured-JSON completions.
///
/// Handlers depend on this trait rather than on [`GenAiClient`] directly
/// so tests can substitute deterministic generators. Implementations must
/// return failures as values; callers treat any `Err` as "generation
/// failed" and take their fallback path.
#[async_trait]
pub trait JsonGenerator: Send + Sync {
    /// Produce one decoded JSON value from a system persona and a user
    /// prompt. One attempt; no retries.
    async fn generate_json(&self, system: &str, user: &str) -> Result<Value, GenAiError>;
}

#[async_trait]
impl JsonGenerator for GenAiClient {
    async fn generate_json(&self, system: &str, user: &str) -> Result<Value, GenAiError> {
        self.generate(system, user).await
    }
}
