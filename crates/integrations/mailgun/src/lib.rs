//! Mailgun provider for the Mailbridge email relay.
//!
//! This crate implements the
//! [`EmailProvider`](mailbridge_provider::EmailProvider) trait by posting a
//! form-encoded message to the Mailgun v3 messages endpoint, authenticated
//! with HTTP Basic auth (username `api`, password = API key).
//!
//! # Quick start
//!
//! ```rust,no_run
//! use mailbridge_mailgun::{MailgunConfig, MailgunProvider};
//!
//! let config = MailgunConfig::new("key-123").with_domain("mg.example.com");
//! let provider = MailgunProvider::new(config);
//! assert_eq!(mailbridge_provider::EmailProvider::name(&provider), "mailgun");
//! ```

pub mod config;
pub mod error;
pub mod provider;

pub use config::MailgunConfig;
pub use error::MailgunError;
pub use provider::MailgunProvider;
