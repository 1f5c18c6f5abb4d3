use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Required payload fields, in the canonical order used for validation
/// error messages.
pub const REQUIRED_FIELDS: [&str; 6] = ["to", "to_name", "from", "from_name", "subject", "body"];

/// A validated email-send request.
///
/// All fields are guaranteed non-empty by the time a payload is constructed;
/// callers run [`missing_fields`] over the raw JSON body first. The optional
/// provider-selection field (`defaultService`) is not part of the payload --
/// it only influences routing and is handled separately by
/// [`ServicePair::resolve`](crate::service::ServicePair::resolve).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmailPayload {
    /// Recipient email address.
    pub to: String,
    /// Recipient display name.
    pub to_name: String,
    /// Sender email address.
    pub from: String,
    /// Sender display name.
    pub from_name: String,
    /// Subject line.
    pub subject: String,
    /// Message body. May contain HTML markup; providers strip it before
    /// sending.
    pub body: String,
}

/// Returns the required field names that are absent, not a JSON string, or
/// an empty string, preserving the canonical field order.
///
/// An empty result means the body is valid. The input is not mutated and
/// extra fields (including `defaultService`) are ignored.
pub fn missing_fields(body: &Map<String, Value>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !matches!(body.get(*field), Some(Value::String(s)) if !s.is_empty()))
        .collect()
}
