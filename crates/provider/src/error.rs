use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when sending through a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider rejected the send (non-2xx response).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// A network or transport-level error occurred.
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider did not respond within the allowed duration.
    #[error("timeout after {0:?}")]
    Timeout(Duration),

    /// The provider was given invalid configuration (e.g. a missing API key).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The provider rejected the request due to rate limiting.
    #[error("rate limited")]
    RateLimited,

    /// A serialization or deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ProviderError {
    /// Returns `true` if the error is transient and the send may succeed on
    /// retry. Mailbridge itself never retries a provider; this informs the
    /// caller's fallback decision and diagnostics.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::RateLimited
        )
    }
}
