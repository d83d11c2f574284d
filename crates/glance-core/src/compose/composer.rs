//! Answer composition over a completion model.

use super::openai::{CompletionModel, OpenAiCompletions};
use super::prompt::render_prompt;
use super::session::Session;
use crate::config::{resolve_env_var, ComposerConfig};
use crate::error::{ComposeError, ConfigError};
use std::sync::Arc;
use std::time::Duration;

/// Turns (question, description, transcript) into an answer and grows the
/// transcript on success.
pub struct Composer {
    model: Arc<dyn CompletionModel>,
    history_window: usize,
}

impl std::fmt::Debug for Composer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field("history_window", &self.history_window)
            .finish_non_exhaustive()
    }
}

impl Composer {
    pub fn new(model: Box<dyn CompletionModel>, history_window: usize) -> Self {
        Self {
            model: Arc::from(model),
            history_window,
        }
    }

    /// Build a composer over the production completions client.
    pub fn from_config(config: &ComposerConfig) -> Result<Self, ConfigError> {
        let api_key = resolve_env_var(&config.api_key).ok_or_else(|| {
            ConfigError::MissingCredential(format!("composer.api_key ({})", config.api_key))
        })?;

        let model = OpenAiCompletions::new(&api_key, &config.model)
            .with_endpoint(&config.endpoint)
            .with_sampling(config.temperature, config.max_tokens)
            .with_timeout(Duration::from_millis(config.timeout_ms));

        Ok(Self::new(Box::new(model), config.history_window))
    }

    /// Answer a question about an image, grounded in its description.
    ///
    /// The exchange is appended to the session only when the model call
    /// succeeds, so a failed request leaves the transcript untouched.
    pub async fn answer(
        &self,
        question: &str,
        description: &str,
        session: &mut Session,
    ) -> Result<String, ComposeError> {
        let prompt = render_prompt(question, description, session.recent(self.history_window));
        tracing::debug!(model = self.model.name(), "Requesting answer completion");

        let answer = self.model.complete(&prompt).await?;
        session.record(question, answer.clone());
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock model that records every prompt it receives.
    struct MockModel {
        response_fn: Box<dyn Fn(u32) -> Result<String, ComposeError> + Send + Sync>,
        prompts_seen: Mutex<Vec<String>>,
    }

    impl MockModel {
        fn new(
            response_fn: impl Fn(u32) -> Result<String, ComposeError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                response_fn: Box::new(response_fn),
                prompts_seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionModel for MockModel {
        fn name(&self) -> &str {
            "mock-completions"
        }

        async fn complete(&self, prompt: &str) -> Result<String, ComposeError> {
            let mut prompts = self.prompts_seen.lock().unwrap();
            let idx = prompts.len() as u32;
            prompts.push(prompt.to_string());
            (self.response_fn)(idx)
        }
    }

    fn composer_over(model: Arc<MockModel>, window: usize) -> Composer {
        Composer {
            model,
            history_window: window,
        }
    }

    #[tokio::test]
    async fn test_answer_records_exchange() {
        let model = Arc::new(MockModel::new(|_| Ok("It is a cat.".to_string())));
        let composer = composer_over(model.clone(), 8);
        let mut session = Session::new();

        let answer = composer
            .answer("what is it?", "a ginger cat", &mut session)
            .await
            .unwrap();
        assert_eq!(answer, "It is a cat.");
        assert_eq!(session.len(), 1);
        assert_eq!(session.exchanges()[0].question, "what is it?");
        assert_eq!(session.exchanges()[0].answer, "It is a cat.");
    }

    #[tokio::test]
    async fn test_second_prompt_carries_first_exchange() {
        let model = Arc::new(MockModel::new(|idx| Ok(format!("answer {idx}"))));
        let composer = composer_over(model.clone(), 8);
        let mut session = Session::new();

        composer
            .answer("first question?", "a beach", &mut session)
            .await
            .unwrap();
        composer
            .answer("second question?", "a beach", &mut session)
            .await
            .unwrap();

        let prompts = model.prompts_seen.lock().unwrap();
        assert!(!prompts[0].contains("Previous conversation"));
        assert!(prompts[1].contains("Previous conversation"));
        assert!(prompts[1].contains("Q: first question?"));
        assert!(prompts[1].contains("A: answer 0"));
    }

    #[tokio::test]
    async fn test_history_window_bounds_prompt_context() {
        let model = Arc::new(MockModel::new(|idx| Ok(format!("answer {idx}"))));
        let composer = composer_over(model.clone(), 1);
        let mut session = Session::new();

        for i in 0..3 {
            composer
                .answer(&format!("question {i}?"), "a beach", &mut session)
                .await
                .unwrap();
        }

        // The third prompt sees only the second exchange
        let prompts = model.prompts_seen.lock().unwrap();
        assert!(prompts[2].contains("Q: question 1?"));
        assert!(!prompts[2].contains("Q: question 0?"));
        assert_eq!(session.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_completion_leaves_session_untouched() {
        let model = Arc::new(MockModel::new(|_| {
            Err(ComposeError::Api {
                status: 401,
                message: "invalid api key".to_string(),
            })
        }));
        let composer = composer_over(model, 8);
        let mut session = Session::new();

        let err = composer
            .answer("what is it?", "a cat", &mut session)
            .await
            .unwrap_err();
        assert!(matches!(err, ComposeError::Api { status: 401, .. }));
        assert!(session.is_empty());
    }

    #[tokio::test]
    async fn test_empty_description_still_composes() {
        let model = Arc::new(MockModel::new(|_| Ok("I cannot tell.".to_string())));
        let composer = composer_over(model.clone(), 8);
        let mut session = Session::new();

        let answer = composer.answer("what is it?", "", &mut session).await.unwrap();
        assert_eq!(answer, "I cannot tell.");
        assert!(model.prompts_seen.lock().unwrap()[0].contains("description: \"\""));
    }

    #[test]
    fn test_from_config_reports_missing_credential() {
        let config = ComposerConfig {
            api_key: "${GLANCE_TEST_UNSET_COMPOSER_KEY}".to_string(),
            ..ComposerConfig::default()
        };
        let err = Composer::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(_)));
        assert!(err.to_string().contains("composer.api_key"));
    }
}
