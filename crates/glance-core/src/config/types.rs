//! Sub-configuration structs with defaults.

use serde::{Deserialize, Serialize};

/// Caption service settings.
///
/// The service holds two credentials: `api_key` is tried first, and
/// `fallback_api_key` is used when the service rejects the first one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriberConfig {
    /// Caption service endpoint
    pub endpoint: String,

    /// Primary API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Fallback API key tried after a credential rejection (supports ${ENV_VAR} syntax)
    pub fallback_api_key: String,

    /// Per-attempt timeout in milliseconds
    pub timeout_ms: u64,

    /// Extra attempts for transient transport failures (0 disables)
    pub retry_attempts: u32,

    /// Base backoff delay between transient retries in milliseconds
    pub retry_delay_ms: u64,
}

impl Default for DescriberConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://us-central1-causal-diffusion.cloudfunctions.net/describe"
                .to_string(),
            api_key: "${SCENEX_API_KEY}".to_string(),
            fallback_api_key: "${SCENEX_API_KEY_V2}".to_string(),
            timeout_ms: 20_000,
            retry_attempts: 0,
            retry_delay_ms: 1000,
        }
    }
}

/// Completion model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Completions endpoint
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens to generate per answer
    pub max_tokens: u32,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Number of recent exchanges included in the prompt (0 disables history)
    pub history_window: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/completions".to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            temperature: 0.9,
            max_tokens: 256,
            timeout_ms: 60_000,
            history_window: 8,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
