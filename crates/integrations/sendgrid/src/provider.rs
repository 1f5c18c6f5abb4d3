use mailbridge_core::{EmailPayload, html_to_plain_text};
use mailbridge_provider::{EmailProvider, ProviderError, SendReceipt};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::SendgridConfig;
use crate::error::SendgridError;
use crate::types::{Content, EmailAddress, MailSendRequest, Personalization};

/// Sendgrid provider that sends messages via the v3 mail-send API.
///
/// Builds a structured JSON body with one personalization containing a
/// single recipient and one content block, and authenticates with a bearer
/// token. Refuses to send when no API key is configured.
pub struct SendgridProvider {
    config: SendgridConfig,
    client: Client,
}

/// Build the mail-send request body from a payload.
///
/// A free function so the wire mapping can be tested without a client. The
/// content block keeps the `text/html` type even though the value has had
/// its tags stripped; providers render plain text under `text/html` and the
/// upstream behavior is preserved deliberately.
fn build_request(payload: &EmailPayload) -> MailSendRequest {
    MailSendRequest {
        personalizations: vec![Personalization {
            to: vec![EmailAddress {
                email: payload.to.clone(),
                name: payload.to_name.clone(),
            }],
        }],
        from: EmailAddress {
            email: payload.from.clone(),
            name: payload.from_name.clone(),
        },
        subject: payload.subject.clone(),
        content: vec![Content {
            content_type: "text/html".to_owned(),
            value: html_to_plain_text(&payload.body),
        }],
    }
}

impl SendgridProvider {
    /// Create a new Sendgrid provider with the given configuration.
    ///
    /// Uses a default `reqwest::Client` with reasonable timeouts.
    pub fn new(config: SendgridConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a new Sendgrid provider with a custom HTTP client.
    pub fn with_client(config: SendgridConfig, client: Client) -> Self {
        Self { config, client }
    }

    async fn post_mail(&self, payload: &EmailPayload) -> Result<(), SendgridError> {
        if self.config.api_key.is_empty() {
            return Err(SendgridError::MissingApiKey);
        }

        let request = build_request(payload);

        debug!(url = %self.config.base_url, to = %payload.to, "posting message to Sendgrid");

        let response = self
            .client
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SendgridError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SendgridError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

impl EmailProvider for SendgridProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "sendgrid"
    }

    #[instrument(skip(self, payload), fields(provider = "sendgrid", to = %payload.to))]
    async fn send(&self, payload: &EmailPayload) -> Result<SendReceipt, ProviderError> {
        self.post_mail(payload).await.map_err(|e| {
            tracing::error!(error = %e, "Sendgrid send failed");
            ProviderError::from(e)
        })?;

        debug!("Sendgrid accepted message");
        // Sendgrid answers 202 with an empty body.
        Ok(SendReceipt::new(
            "sendgrid",
            serde_json::json!({"status": "accepted"}),
        ))
    }

    #[instrument(skip(self), fields(provider = "sendgrid"))]
    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::Configuration(
                "SENDGRID_API_KEY is not configured".into(),
            ));
        }
        Ok(())
    }
}
