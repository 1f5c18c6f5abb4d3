use mailbridge_core::{EmailPayload, html_to_plain_text};
use mailbridge_provider::{EmailProvider, ProviderError, SendReceipt};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::MailgunConfig;
use crate::error::MailgunError;

/// Mailgun provider that sends messages via the Mailgun v3 HTTP API.
///
/// Builds a form-encoded request with combined `"{name} {address}"` sender
/// and recipient fields and a plain-text body (HTML tags stripped), and
/// authenticates with HTTP Basic auth using the literal username `api`.
pub struct MailgunProvider {
    config: MailgunConfig,
    client: Client,
}

impl MailgunProvider {
    /// Create a new Mailgun provider with the given configuration.
    ///
    /// Uses a default `reqwest::Client` with reasonable timeouts.
    pub fn new(config: MailgunConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    /// Create a new Mailgun provider with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool across providers.
    pub fn with_client(config: MailgunConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Build the full URL of the messages endpoint for the configured domain.
    fn messages_url(&self) -> String {
        format!("{}/{}/messages", self.config.base_url, self.config.domain)
    }

    /// Build the form fields for a send request.
    ///
    /// A free-standing mapping so it can be tested without a client.
    fn form_fields(payload: &EmailPayload) -> [(&'static str, String); 4] {
        [
            ("from", format!("{} {}", payload.from_name, payload.from)),
            ("to", format!("{} {}", payload.to_name, payload.to)),
            ("subject", payload.subject.clone()),
            ("text", html_to_plain_text(&payload.body)),
        ]
    }

    async fn post_message(&self, payload: &EmailPayload) -> Result<serde_json::Value, MailgunError> {
        let url = self.messages_url();
        let fields = Self::form_fields(payload);

        debug!(url = %url, to = %payload.to, "posting message to Mailgun");

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(&fields)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MailgunError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailgunError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        // Mailgun answers with {"id": ..., "message": ...}; tolerate any body.
        Ok(response.json().await.unwrap_or(serde_json::Value::Null))
    }
}

impl EmailProvider for MailgunProvider {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "mailgun"
    }

    #[instrument(skip(self, payload), fields(provider = "mailgun", to = %payload.to))]
    async fn send(&self, payload: &EmailPayload) -> Result<SendReceipt, ProviderError> {
        let body = self.post_message(payload).await.map_err(|e| {
            tracing::error!(error = %e, "Mailgun send failed");
            ProviderError::from(e)
        })?;

        debug!("Mailgun accepted message");
        Ok(SendReceipt::new("mailgun", body))
    }

    #[instrument(skip(self), fields(provider = "mailgun"))]
    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::Configuration(
                "MAILGUN_API_KEY is not configured".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mailbridge_provider::{EmailProvider, ProviderError};

    use super::*;
    use crate::config::MailgunConfig;

    /// A minimal mock HTTP server built on tokio that returns canned
    /// responses and hands back the raw request it received.
    struct MockMailgunServer {
        listener: tokio::net::TcpListener,
        base_url: String,
    }

    impl MockMailgunServer {
        async fn start() -> Self {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("failed to bind mock server");
            let port = listener.local_addr().unwrap().port();
            let base_url = format!("http://127.0.0.1:{port}/v3");
            Self { listener, base_url }
        }

        /// Accept one connection, respond with the given status code and JSON
        /// body, then return the raw request bytes for assertions.
        async fn respond_once(self, status_code: u16, body: &str) -> String {
            let body = body.to_owned();
            let (mut stream, _) = self.listener.accept().await.unwrap();

            use tokio::io::{AsyncReadExt, AsyncWriteExt};

            // Read until the headers and the announced body are complete.
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status_code} OK\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\
                 \r\n\
                 {body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();

            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    /// Whether `buf` holds a full request: headers terminated and, when a
    /// `Content-Length` header is present, that many body bytes received.
    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text
            .lines()
            .take_while(|line| !line.is_empty())
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())?
            })
            .unwrap_or(0);
        buf.len() >= header_end + 4 + content_length
    }

    fn test_payload() -> EmailPayload {
        EmailPayload {
            to: "receiver@mail.com".into(),
            to_name: "Receiver".into(),
            from: "sender@mail.com".into(),
            from_name: "Sender".into(),
            subject: "Test".into(),
            body: "<p>Hello <b>World</b></p>".into(),
        }
    }

    #[test]
    fn provider_name() {
        let provider = MailgunProvider::new(MailgunConfig::new("key-test"));
        assert_eq!(provider.name(), "mailgun");
    }

    #[test]
    fn form_fields_combine_names_and_strip_html() {
        let fields = MailgunProvider::form_fields(&test_payload());
        assert_eq!(fields[0], ("from", "Sender sender@mail.com".to_owned()));
        assert_eq!(fields[1], ("to", "Receiver receiver@mail.com".to_owned()));
        assert_eq!(fields[2], ("subject", "Test".to_owned()));
        assert_eq!(fields[3], ("text", "Hello World".to_owned()));
    }

    #[test]
    fn messages_url_includes_domain() {
        let config = MailgunConfig::new("key-test").with_domain("mg.example.com");
        let provider = MailgunProvider::new(config);
        assert_eq!(
            provider.messages_url(),
            "https://api.mailgun.net/v3/mg.example.com/messages"
        );
    }

    #[tokio::test]
    async fn send_success() {
        let server = MockMailgunServer::start().await;
        let config = MailgunConfig::new("key-test")
            .with_domain("mg.example.com")
            .with_base_url(&server.base_url);
        let provider = MailgunProvider::new(config);

        let response_body = r#"{"id":"<msg@mg.example.com>","message":"Queued. Thank you."}"#;
        let server_handle =
            tokio::spawn(async move { server.respond_once(200, response_body).await });

        let receipt = provider
            .send(&test_payload())
            .await
            .expect("send should succeed");
        let request = server_handle.await.unwrap();

        assert_eq!(receipt.provider, "mailgun");
        assert_eq!(receipt.body["message"], "Queued. Thank you.");

        assert!(request.starts_with("POST /v3/mg.example.com/messages"));
        // Basic auth with username `api` and the configured key.
        assert!(request.contains("authorization: Basic YXBpOmtleS10ZXN0"));
        assert!(request.contains(
            "from=Sender+sender%40mail.com&to=Receiver+receiver%40mail.com&subject=Test&text=Hello+World"
        ));
    }

    #[tokio::test]
    async fn send_auth_failure() {
        let server = MockMailgunServer::start().await;
        let config = MailgunConfig::new("key-bad").with_base_url(&server.base_url);
        let provider = MailgunProvider::new(config);

        let server_handle =
            tokio::spawn(async move { server.respond_once(401, r#"{"message":"Forbidden"}"#).await });

        let err = provider.send(&test_payload()).await.unwrap_err();
        server_handle.await.unwrap();

        assert!(matches!(err, ProviderError::ExecutionFailed(_)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn send_rate_limited_is_retryable() {
        let server = MockMailgunServer::start().await;
        let config = MailgunConfig::new("key-test").with_base_url(&server.base_url);
        let provider = MailgunProvider::new(config);

        let server_handle =
            tokio::spawn(async move { server.respond_once(429, r#"{"message":"slow down"}"#).await });

        let err = provider.send(&test_payload()).await.unwrap_err();
        server_handle.await.unwrap();

        assert!(matches!(err, ProviderError::RateLimited));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn send_connection_error() {
        // Nothing is listening on this port.
        let config = MailgunConfig::new("key-test").with_base_url("http://127.0.0.1:1/v3");
        let provider = MailgunProvider::new(config);

        let err = provider.send(&test_payload()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Connection(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn health_check_requires_api_key() {
        let provider = MailgunProvider::new(MailgunConfig::new(""));
        let err = provider.health_check().await.unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(_)));

        let provider = MailgunProvider::new(MailgunConfig::new("key-test"));
        provider.health_check().await.unwrap();
    }
}
