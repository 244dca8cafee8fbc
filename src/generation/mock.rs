//! Scripted generation service for testing

use super::service::{GenerationError, GenerationService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued outcomes and records every prompt it is sent
///
/// Clones share the same queue and call log.
#[derive(Clone, Default)]
pub struct ScriptedGenerator {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn push_text(&self, text: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failure; surfaces as `GenerationError::Status { status: 500 }`
    pub fn push_failure(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    /// Number of generate calls made so far
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for ScriptedGenerator {
    async fn generate(&self, _model: &str, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) if text.is_empty() => Err(GenerationError::EmptyResponse),
            Some(Ok(text)) => Ok(text),
            Some(Err(body)) => Err(GenerationError::Status { status: 500, body }),
            None => Err(GenerationError::EmptyResponse),
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}
