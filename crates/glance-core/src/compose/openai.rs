//! OpenAI completions client.
//!
//! Drives a legacy `/v1/completions`-shaped endpoint with Bearer auth. The
//! answer model is a plain text-in/text-out completion, so the whole
//! rendered prompt travels in a single `prompt` field.

use crate::error::ComposeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Trait the composer is written against.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Model/provider name for logging.
    fn name(&self) -> &str;

    /// Generate a completion for the rendered prompt.
    async fn complete(&self, prompt: &str) -> Result<String, ComposeError>;
}

// --- Request types ---

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

// --- Response types ---

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: Option<String>,
}

/// Production completions client.
pub struct OpenAiCompletions {
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenAiCompletions {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/completions".to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            temperature: 0.9,
            max_tokens: 256,
            timeout: Duration::from_secs(60),
            client: reqwest::Client::new(),
        }
    }

    /// Point the client at a different completions endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl CompletionModel for OpenAiCompletions {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ComposeError> {
        let body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ComposeError::Timeout {
                        timeout_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    ComposeError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ComposeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CompletionResponse = resp.json().await.map_err(|e| ComposeError::Malformed {
            message: e.to_string(),
        })?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.text)
            .ok_or_else(|| ComposeError::Malformed {
                message: "completion response contained no choices".to_string(),
            })?;

        Ok(text.trim().to_string())
    }
}
