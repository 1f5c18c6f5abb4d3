use mailbridge_core::ServiceKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An email-send request.
///
/// Used for the OpenAPI document; the handler itself validates the raw JSON
/// body so it can report missing fields in canonical order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailRequest {
    /// Recipient email address.
    #[schema(example = "receiver@mail.com")]
    pub to: String,
    /// Recipient display name.
    #[schema(example = "Receiver")]
    pub to_name: String,
    /// Sender email address.
    #[schema(example = "sender@mail.com")]
    pub from: String,
    /// Sender display name.
    #[schema(example = "Sender")]
    pub from_name: String,
    /// Subject line.
    #[schema(example = "Hello")]
    pub subject: String,
    /// Message body; HTML markup is stripped before dispatch.
    #[schema(example = "<p>Hello <b>World</b></p>")]
    pub body: String,
    /// Which service to try first. Unrecognized or missing values select
    /// Mailgun.
    #[serde(rename = "defaultService", skip_serializing_if = "Option::is_none")]
    pub default_service: Option<ServiceKind>,
}

/// Successful send response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendEmailResponse {
    /// Human-readable confirmation naming the provider that sent the email.
    #[schema(example = "Email sent successfully with mailgun.")]
    pub message: String,
}

/// Generic error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall service status: `ok` or `degraded`.
    #[schema(example = "ok")]
    pub status: String,
    /// Per-provider health, keyed by provider name; `ok` or an error
    /// description.
    pub providers: ProvidersHealth,
}

/// Per-provider health status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProvidersHealth {
    #[schema(example = "ok")]
    pub mailgun: String,
    #[schema(example = "invalid configuration: SENDGRID_API_KEY is not configured")]
    pub sendgrid: String,
}
