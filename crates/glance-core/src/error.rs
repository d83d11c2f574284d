//! Error types for glance.
//!
//! Each external collaborator gets its own error enum so callers can branch
//! on exact failure kinds: credential rejections, other HTTP failures,
//! transport failures, and unparseable bodies are all distinct variants.

use thiserror::Error;

/// Top-level error type for glance operations.
#[derive(Error, Debug)]
pub enum GlanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image description errors
    #[error("Description error: {0}")]
    Describe(#[from] DescribeError),

    /// Answer composition errors
    #[error("Composition error: {0}")]
    Compose(#[from] ComposeError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// A required secret resolved to nothing
    #[error("Missing credential: {0}")]
    MissingCredential(String),
}

/// Errors from the caption service.
///
/// The caption service signals "invalid credential" with HTTP 400, which is
/// the only variant the describer recovers from by switching credentials.
#[derive(Error, Debug)]
pub enum DescribeError {
    /// The service rejected the supplied credential (HTTP 400)
    #[error("Caption service rejected the credential")]
    InvalidCredential,

    /// Any other non-success HTTP status
    #[error("Caption service HTTP {status}: {message}")]
    Service { status: u16, message: String },

    /// Connection-level failure before an HTTP status was obtained
    #[error("Caption request failed: {message}")]
    Network { message: String },

    /// The per-attempt deadline elapsed
    #[error("Caption request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The response body could not be parsed
    #[error("Malformed caption response: {message}")]
    Malformed { message: String },
}

/// Errors from the completion model.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// Non-success HTTP status from the completion endpoint
    #[error("Completion API HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Connection-level failure before an HTTP status was obtained
    #[error("Completion request failed: {message}")]
    Network { message: String },

    /// The per-attempt deadline elapsed
    #[error("Completion request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// The response body could not be parsed, or contained no choices
    #[error("Malformed completion response: {message}")]
    Malformed { message: String },
}

/// Convenience type alias for glance results.
pub type Result<T> = std::result::Result<T, GlanceError>;
