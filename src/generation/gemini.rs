use super::messages::{GenerateContentRequest, GenerateContentResponse};
use super::service::{GenerationError, GenerationService};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

/// Google Gemini `generateContent` client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a client for `api_base` (normally `DEFAULT_API_BASE`)
    pub fn new(api_key: String, api_base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Full `generateContent` URL for a model ("gemini-pro" or "models/gemini-pro")
    fn endpoint(&self, model: &str) -> String {
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        info!(
            "Calling Gemini generateContent (model={}, prompt_chars={})",
            model,
            prompt.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini returned {}: {}", status, body);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Request(e.without_url()))?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Decode(e.to_string()))?;

        if let Some(usage) = &parsed.usage_metadata {
            info!(
                "Gemini usage: prompt={} candidates={} total={}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        let Some(text) = parsed.text() else {
            return Err(match parsed.finish_reason() {
                Some(reason) if reason != "STOP" => {
                    warn!("Gemini stopped without text: {}", reason);
                    GenerationError::Blocked(reason.to_string())
                }
                _ => GenerationError::EmptyResponse,
            });
        };
        info!("Gemini generated {} characters", text.chars().count());

        Ok(text)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}
