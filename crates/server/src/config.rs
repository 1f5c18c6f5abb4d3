use serde::Deserialize;

/// Top-level configuration for the Mailbridge server, loaded from a TOML
/// file.
///
/// Provider credentials are not part of this file; they are read from the
/// environment when the providers are constructed
/// ([`MailgunConfig::from_env`](mailbridge_mailgun::MailgunConfig::from_env),
/// [`SendgridConfig::from_env`](mailbridge_sendgrid::SendgridConfig::from_env)).
#[derive(Debug, Default, Deserialize)]
pub struct MailbridgeConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server bind configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    8080
}
