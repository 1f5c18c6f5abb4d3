/// Default URL of the Sendgrid v3 mail-send endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Configuration for the Sendgrid provider.
#[derive(Clone)]
pub struct SendgridConfig {
    /// API key sent as a bearer token.
    pub api_key: String,

    /// Full URL of the mail-send endpoint. Override this for testing
    /// against a mock server.
    pub base_url: String,
}

impl std::fmt::Debug for SendgridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendgridConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SendgridConfig {
    /// Create a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SENDGRID_API_KEY` (empty string if unset; the provider fails
    /// sends until a key is configured).
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("SENDGRID_API_KEY").unwrap_or_default(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Override the mail-send endpoint URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}
