use mailbridge_provider::ProviderError;
use thiserror::Error;

/// Errors specific to the Mailgun provider.
///
/// These are internal errors that get converted into [`ProviderError`] at the
/// public API boundary.
#[derive(Debug, Error)]
pub enum MailgunError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Mailgun API returned an unexpected status code.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The provider received an HTTP 429 (Too Many Requests) response.
    #[error("rate limited by Mailgun")]
    RateLimited,
}

impl From<MailgunError> for ProviderError {
    fn from(err: MailgunError) -> Self {
        match err {
            MailgunError::Http(e) => ProviderError::Connection(e.to_string()),
            MailgunError::UnexpectedStatus { status, body } => {
                ProviderError::ExecutionFailed(format!("HTTP {status}: {body}"))
            }
            MailgunError::RateLimited => ProviderError::RateLimited,
        }
    }
}
