//! SceneXplain caption client.
//!
//! Speaks the service's JSON protocol: a `data` array of per-image requests
//! with a fixed algorithm and target-language list, authenticated with an
//! `x-api-key: token <key>` header. HTTP 400 carries this service's
//! "invalid credential" semantics and maps to its own error variant.

use crate::error::DescribeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Algorithm identifier sent with every caption request.
const ALGORITHM: &str = "Ember";

/// Target languages for generated captions.
const LANGUAGES: &[&str] = &["en"];

// --- Request types ---

#[derive(Serialize)]
struct CaptionRequest<'a> {
    data: Vec<CaptionItem<'a>>,
}

#[derive(Serialize)]
struct CaptionItem<'a> {
    image: &'a str,
    algorithm: &'static str,
    languages: &'static [&'static str],
}

// --- Response types ---

#[derive(Deserialize)]
struct CaptionResponse {
    #[serde(default)]
    result: Vec<CaptionResult>,
}

#[derive(Deserialize)]
struct CaptionResult {
    text: Option<String>,
}

/// Trait the failover policy is written against.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn CaptionService>` for dynamic dispatch in tests).
#[async_trait]
pub trait CaptionService: Send + Sync {
    /// Service name for logging.
    fn name(&self) -> &str;

    /// Fetch a caption for `image` using the given credential.
    ///
    /// A successful response with no usable text yields `Ok("")`.
    async fn caption(&self, image: &str, api_key: &str) -> Result<String, DescribeError>;
}

/// Production caption client for the SceneXplain HTTP API.
pub struct SceneXplainClient {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl SceneXplainClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CaptionService for SceneXplainClient {
    fn name(&self) -> &str {
        "scenexplain"
    }

    async fn caption(&self, image: &str, api_key: &str) -> Result<String, DescribeError> {
        let body = CaptionRequest {
            data: vec![CaptionItem {
                image,
                algorithm: ALGORITHM,
                languages: LANGUAGES,
            }],
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", format!("token {api_key}"))
            .header("content-type", "application/json")
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, self.timeout))?;

        let status = resp.status();
        if status.as_u16() == 400 {
            let detail = resp.text().await.unwrap_or_default();
            tracing::debug!("Caption service rejected credential: {detail}");
            return Err(DescribeError::InvalidCredential);
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(DescribeError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: CaptionResponse = resp.json().await.map_err(|e| DescribeError::Malformed {
            message: e.to_string(),
        })?;

        Ok(parsed
            .result
            .into_iter()
            .next()
            .and_then(|r| r.text)
            .unwrap_or_default())
    }
}

fn classify_transport_error(err: reqwest::Error, timeout: Duration) -> DescribeError {
    if err.is_timeout() {
        DescribeError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    } else {
        DescribeError::Network {
            message: err.to_string(),
        }
    }
}
