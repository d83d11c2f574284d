//! Transient-failure classification and backoff for caption attempts.

use crate::error::DescribeError;
use std::time::Duration;

/// Whether an error may clear up on its own if the same attempt is re-issued.
///
/// Only transport-level failures qualify. Credential rejections and other
/// HTTP statuses are deterministic answers from the service, not noise.
pub fn is_transient(error: &DescribeError) -> bool {
    matches!(
        error,
        DescribeError::Network { .. } | DescribeError::Timeout { .. }
    )
}

/// Calculate exponential backoff duration for a given attempt.
///
/// Uses `base_delay * 2^attempt` with a cap at 30 seconds.
pub fn backoff_duration(attempt: u32, base_delay_ms: u64) -> Duration {
    let delay = base_delay_ms.saturating_mul(2u64.saturating_pow(attempt));
    Duration::from_millis(delay.min(30_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_transient() {
        let err = DescribeError::Timeout { timeout_ms: 20_000 };
        assert!(is_transient(&err));
    }

    #[test]
    fn test_network_error_is_transient() {
        let err = DescribeError::Network {
            message: "connection refused".to_string(),
        };
        assert!(is_transient(&err));
    }

    #[test]
    fn test_credential_rejection_not_transient() {
        assert!(!is_transient(&DescribeError::InvalidCredential));
    }

    #[test]
    fn test_service_error_not_transient() {
        let err = DescribeError::Service {
            status: 503,
            message: "service unavailable".to_string(),
        };
        assert!(!is_transient(&err));
    }

    #[test]
    fn test_malformed_not_transient() {
        let err = DescribeError::Malformed {
            message: "expected value".to_string(),
        };
        assert!(!is_transient(&err));
    }

    #[test]
    fn test_backoff_exponential() {
        assert_eq!(backoff_duration(0, 1000), Duration::from_millis(1000));
        assert_eq!(backoff_duration(1, 1000), Duration::from_millis(2000));
        assert_eq!(backoff_duration(2, 1000), Duration::from_millis(4000));
        assert_eq!(backoff_duration(3, 1000), Duration::from_millis(8000));
    }

    #[test]
    fn test_backoff_capped_at_30s() {
        assert_eq!(backoff_duration(10, 1000), Duration::from_millis(30_000));
    }
}
