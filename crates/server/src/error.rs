use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur when handling a Mailbridge request.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request used a method other than POST.
    #[error("{0} method not allowed.")]
    MethodNotAllowed(String),

    /// Required payload fields are absent, non-string, or empty.
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Both the default and the fallback provider failed to send.
    #[error("Email sending failed with both services.")]
    AllProvidersFailed,

    /// Anything unanticipated (e.g. a malformed request body). The detail is
    /// logged; the response body stays generic.
    #[error("internal error: {0}")]
    Internal(String),

    /// A configuration error (startup only).
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            Self::MissingFields(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::AllProvidersFailed => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_owned(),
                )
            }
            Self::Config(_) | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.".to_owned(),
            ),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
