//! Credential failover policy for image description.
//!
//! A description request makes at most two credential attempts: the primary
//! key, then the fallback key if and only if the service rejected the
//! primary. A second rejection collapses to an empty description rather than
//! an error; every other failure kind propagates untouched.

use super::retry;
use super::scenex::{CaptionService, SceneXplainClient};
use crate::config::{resolve_env_var, DescriberConfig};
use crate::error::{ConfigError, DescribeError};
use std::sync::Arc;
use std::time::Duration;

/// The two caption-service credentials, resolved once at startup.
#[derive(Debug, Clone)]
pub struct CaptionCredentials {
    /// Credential tried first on every request
    pub primary: String,
    /// Credential tried once after the primary is rejected
    pub secondary: String,
}

/// Fetches image descriptions with bounded credential failover.
pub struct Describer {
    service: Arc<dyn CaptionService>,
    credentials: CaptionCredentials,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl std::fmt::Debug for Describer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Describer")
            .field("retry_attempts", &self.retry_attempts)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .finish_non_exhaustive()
    }
}

impl Describer {
    pub fn new(service: Box<dyn CaptionService>, credentials: CaptionCredentials) -> Self {
        Self {
            service: Arc::from(service),
            credentials,
            retry_attempts: 0,
            retry_delay_ms: 1000,
        }
    }

    /// Enable bounded same-credential retries for transient transport failures.
    ///
    /// This never multiplies credential attempts: a rejected credential is
    /// still failed over at most once.
    pub fn with_transient_retry(mut self, attempts: u32, base_delay_ms: u64) -> Self {
        self.retry_attempts = attempts;
        self.retry_delay_ms = base_delay_ms;
        self
    }

    /// Build a describer over the production caption client.
    pub fn from_config(config: &DescriberConfig) -> Result<Self, ConfigError> {
        let primary = resolve_env_var(&config.api_key).ok_or_else(|| {
            ConfigError::MissingCredential(format!("describer.api_key ({})", config.api_key))
        })?;
        let secondary = resolve_env_var(&config.fallback_api_key).ok_or_else(|| {
            ConfigError::MissingCredential(format!(
                "describer.fallback_api_key ({})",
                config.fallback_api_key
            ))
        })?;

        let service = SceneXplainClient::new(
            &config.endpoint,
            Duration::from_millis(config.timeout_ms),
        );
        Ok(
            Self::new(Box::new(service), CaptionCredentials { primary, secondary })
                .with_transient_retry(config.retry_attempts, config.retry_delay_ms),
        )
    }

    /// Fetch a description for the given image reference.
    ///
    /// Returns `Ok("")` when no caption is available: the service replied
    /// without usable text, replied unparseably, or rejected both
    /// credentials. Callers must treat the empty string as "no caption",
    /// not as success-with-content.
    pub async fn describe(&self, image: &str) -> Result<String, DescribeError> {
        match self.attempt(image, &self.credentials.primary).await {
            Ok(text) => Ok(text),
            Err(DescribeError::InvalidCredential) => {
                tracing::warn!(
                    service = self.service.name(),
                    "Primary caption credential rejected, retrying with fallback"
                );
                match self.attempt(image, &self.credentials.secondary).await {
                    Ok(text) => Ok(text),
                    Err(DescribeError::InvalidCredential) => {
                        tracing::warn!(
                            service = self.service.name(),
                            "Fallback caption credential also rejected, no caption available"
                        );
                        Ok(String::new())
                    }
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// One credential's attempt, with optional transient-failure retries.
    ///
    /// An unparseable response body is recovered here to an empty caption so
    /// it can never leak out of `describe` as an error.
    async fn attempt(&self, image: &str, api_key: &str) -> Result<String, DescribeError> {
        let mut attempt = 0u32;
        loop {
            match self.service.caption(image, api_key).await {
                Ok(text) => return Ok(text),
                Err(DescribeError::Malformed { message }) => {
                    tracing::warn!("Discarding malformed caption response: {message}");
                    return Ok(String::new());
                }
                Err(err) if retry::is_transient(&err) && attempt < self.retry_attempts => {
                    let delay = retry::backoff_duration(attempt, self.retry_delay_ms);
                    tracing::debug!(
                        "Transient caption failure ({err}), retry {}/{} in {delay:?}",
                        attempt + 1,
                        self.retry_attempts
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
