use async_trait::async_trait;
use thiserror::Error;

/// Why a generation call produced no text
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Transport failure; the URL is stripped before wrapping
    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("service returned no text")]
    EmptyResponse,

    #[error("service returned no text (finish reason: {0})")]
    Blocked(String),
}

/// External text-generation endpoint
///
/// One call per generate action; implementations do not retry.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Send a single composed prompt to `model` and return the generated text
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}
