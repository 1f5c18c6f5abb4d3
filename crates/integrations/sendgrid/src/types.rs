//! Wire types for the Sendgrid v3 mail-send request body.
//!
//! <https://docs.sendgrid.com/api-reference/mail-send/mail-send>

use serde::{Deserialize, Serialize};

/// Top-level mail-send request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<Content>,
}

/// A personalization entry; Mailbridge always sends exactly one, with a
/// single recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

/// An email address with a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,
    pub name: String,
}

/// A content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// MIME type declared to Sendgrid. Mailbridge always declares
    /// `text/html` even though tags are stripped from the value; see the
    /// provider docs for the rationale.
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}
