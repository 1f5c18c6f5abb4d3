//! Sendgrid provider for the Mailbridge email relay.
//!
//! This crate implements the
//! [`EmailProvider`](mailbridge_provider::EmailProvider) trait by posting a
//! JSON body to the Sendgrid v3 mail-send endpoint, authenticated with a
//! bearer token.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use mailbridge_sendgrid::{SendgridConfig, SendgridProvider};
//!
//! let config = SendgridConfig::new("SG.test-key");
//! let provider = SendgridProvider::new(config);
//! assert_eq!(mailbridge_provider::EmailProvider::name(&provider), "sendgrid");
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::SendgridConfig;
pub use error::SendgridError;
pub use provider::SendgridProvider;
pub use types::{Content, EmailAddress, MailSendRequest, Personalization};
