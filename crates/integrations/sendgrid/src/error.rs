use mailbridge_provider::ProviderError;
use thiserror::Error;

/// Errors specific to the Sendgrid provider.
///
/// These are internal errors that get converted into [`ProviderError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum SendgridError {
    /// No API key is configured; the send is refused before any HTTP call.
    #[error("Sendgrid API key missing")]
    MissingApiKey,

    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Sendgrid API returned an unexpected status code.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The provider received an HTTP 429 (Too Many Requests) response.
    #[error("rate limited by Sendgrid")]
    RateLimited,
}

impl From<SendgridError> for ProviderError {
    fn from(err: SendgridError) -> Self {
        match err {
            SendgridError::MissingApiKey => {
                ProviderError::Configuration("Sendgrid API key missing".into())
            }
            SendgridError::Http(e) => ProviderError::Connection(e.to_string()),
            SendgridError::UnexpectedStatus { status, body } => {
                ProviderError::ExecutionFailed(format!("HTTP {status}: {body}"))
            }
            SendgridError::RateLimited => ProviderError::RateLimited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_maps_to_configuration() {
        let provider_err: ProviderError = SendgridError::MissingApiKey.into();
        assert!(matches!(provider_err, ProviderError::Configuration(_)));
        assert!(!provider_err.is_retryable());
    }

    #[test]
    fn rate_limited_maps_to_retryable() {
        let provider_err: ProviderError = SendgridError::RateLimited.into();
        assert!(provider_err.is_retryable());
    }

    #[test]
    fn unexpected_status_maps_to_non_retryable() {
        let provider_err: ProviderError = SendgridError::UnexpectedStatus {
            status: 403,
            body: "forbidden".into(),
        }
        .into();
        assert!(matches!(provider_err, ProviderError::ExecutionFailed(_)));
        assert!(!provider_err.is_retryable());
    }
}
