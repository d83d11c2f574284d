//! Glance Core - Image question answering grounded in generated captions.
//!
//! Given an image URL and a natural-language question, glance fetches a
//! caption for the image from a remote description service (switching to a
//! fallback credential if the primary is rejected) and asks a hosted
//! completion model to answer the question grounded in that caption.
//!
//! # Architecture
//!
//! ```text
//! (image URL, question) → Describer (caption + credential failover)
//!                       → Composer (prompt template + session transcript → completion model)
//!                       → Explanation (answer, description, display name)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use glance_core::{Config, Glance, Session};
//!
//! #[tokio::main]
//! async fn main() -> glance_core::Result<()> {
//!     let glance = Glance::new(Config::load()?)?;
//!     let mut session = Session::new();
//!
//!     let explanation = glance
//!         .explain("https://host/cat.png", "what breed is this?", &mut session)
//!         .await?;
//!     println!("{}", explanation.answer);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod compose;
pub mod config;
pub mod describe;
pub mod error;
pub mod naming;

// Re-exports for convenient access
pub use compose::{CompletionModel, Composer, Exchange, OpenAiCompletions, Session};
pub use config::Config;
pub use describe::{CaptionCredentials, CaptionService, Describer, SceneXplainClient};
pub use error::{ComposeError, ConfigError, DescribeError, GlanceError, Result};
pub use naming::image_name_from_url;

use serde::Serialize;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The result of one explain call.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    /// The model's answer to the question
    pub answer: String,
    /// The caption the answer was grounded in; empty when none was available
    pub description: String,
    /// Display name derived from the image URL; may be empty
    pub image_name: String,
}

/// Glance - the main entry point wiring describer and composer together.
pub struct Glance {
    config: Config,
    describer: Describer,
    composer: Composer,
}

impl std::fmt::Debug for Glance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Glance")
            .field("config", &self.config)
            .field("describer", &self.describer)
            .field("composer", &self.composer)
            .finish()
    }
}

impl Glance {
    /// Create a new instance with the given configuration.
    ///
    /// Resolves all credentials up front so misconfiguration surfaces here
    /// rather than mid-request.
    pub fn new(config: Config) -> Result<Self> {
        tracing::debug!("Initializing glance v{}", VERSION);
        let describer = Describer::from_config(&config.describer)?;
        let composer = Composer::from_config(&config.composer)?;
        Ok(Self {
            config,
            describer,
            composer,
        })
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Describe the image, then answer the question grounded in the caption.
    ///
    /// A describer error aborts before the completion model is ever called:
    /// a description-dependent prompt cannot be meaningfully composed when
    /// the description step failed outright. An *empty* description is not a
    /// failure and still composes.
    pub async fn explain(
        &self,
        image_url: &str,
        question: &str,
        session: &mut Session,
    ) -> Result<Explanation> {
        let description = self.describer.describe(image_url).await?;
        if description.is_empty() {
            tracing::warn!("No caption available for {image_url}");
        }

        let answer = self.composer.answer(question, &description, session).await?;

        Ok(Explanation {
            answer,
            description,
            image_name: naming::image_name_from_url(image_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_config() -> Config {
        let mut config = Config::default();
        config.describer.api_key = "inline-primary".to_string();
        config.describer.fallback_api_key = "inline-fallback".to_string();
        config.composer.api_key = "inline-openai".to_string();
        config
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_glance_new_with_inline_keys() {
        let glance = Glance::new(offline_config()).unwrap();
        assert_eq!(glance.config().composer.history_window, 8);
    }

    #[test]
    fn test_glance_new_rejects_unresolved_credentials() {
        let mut config = offline_config();
        config.describer.api_key = "${GLANCE_TEST_UNSET_KEY_ABC}".to_string();
        let err = Glance::new(config).unwrap_err();
        assert!(matches!(
            err,
            GlanceError::Config(ConfigError::MissingCredential(_))
        ));
    }
}
