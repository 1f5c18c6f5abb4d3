/// Default base URL for the Mailgun v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.mailgun.net/v3";

/// Sandbox domain used when no sending domain is configured.
pub const SANDBOX_DOMAIN: &str = "sandboxf43bbc8c0b9a4ddf8e6a49c2e0b12a91.mailgun.org";

/// Configuration for the Mailgun provider.
#[derive(Clone)]
pub struct MailgunConfig {
    /// API key used as the Basic auth password (username is always `api`).
    pub api_key: String,

    /// Sending domain. Defaults to the fixed sandbox domain.
    pub domain: String,

    /// Base URL for the Mailgun API. Override this for testing against a
    /// mock server.
    pub base_url: String,
}

impl std::fmt::Debug for MailgunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailgunConfig")
            .field("api_key", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl MailgunConfig {
    /// Create a new configuration with the given API key.
    ///
    /// Uses the default API base URL and the sandbox sending domain.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            domain: SANDBOX_DOMAIN.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `MAILGUN_API_KEY` (empty string if unset)
    /// - `MAILGUN_DOMAIN` (defaults to the sandbox domain)
    pub fn from_env() -> Self {
        let api_key = std::env::var("MAILGUN_API_KEY").unwrap_or_default();
        let domain =
            std::env::var("MAILGUN_DOMAIN").unwrap_or_else(|_| SANDBOX_DOMAIN.to_owned());
        Self {
            api_key,
            domain,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Override the sending domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}
