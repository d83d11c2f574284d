//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.describer.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "describer.endpoint must not be empty".into(),
            ));
        }
        if self.describer.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "describer.timeout_ms must be > 0".into(),
            ));
        }
        if self.composer.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "composer.endpoint must not be empty".into(),
            ));
        }
        if self.composer.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "composer.timeout_ms must be > 0".into(),
            ));
        }
        if self.composer.max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "composer.max_tokens must be > 0".into(),
            ));
        }
        if self.composer.temperature < 0.0 || self.composer.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "composer.temperature must be between 0.0 and 2.0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_endpoint() {
        let mut config = Config::default();
        config.describer.endpoint = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("describer.endpoint"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.describer.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("describer.timeout_ms"));

        let mut config = Config::default();
        config.composer.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("composer.timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_invalid_temperature() {
        let mut config = Config::default();
        config.composer.temperature = 2.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));

        config.composer.temperature = -0.1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_validate_rejects_zero_max_tokens() {
        let mut config = Config::default();
        config.composer.max_tokens = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_tokens"));
    }
}
