use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::warn;

use mailbridge_core::{EmailPayload, ServicePair, missing_fields};

use crate::error::ServerError;

use super::AppState;
use super::schemas::{ErrorResponse, SendEmailRequest, SendEmailResponse};

/// `POST /v1/send` -- validate the request and relay the email, falling back
/// to the second provider when the first fails.
///
/// The `defaultService` field selects which provider is tried first
/// (`sendgrid` puts Sendgrid first; anything else selects Mailgun) and is
/// excluded from required-field validation.
#[utoipa::path(
    post,
    path = "/v1/send",
    tag = "Send",
    summary = "Send email",
    description = "Validates the payload, sends through the requested default provider, and retries once with the fallback provider on failure.",
    request_body(content = SendEmailRequest, description = "Email to send"),
    responses(
        (status = 200, description = "Email sent", body = SendEmailResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Both providers failed or internal error", body = ErrorResponse)
    )
)]
pub async fn send_email(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    // A body that cannot be parsed at all is an internal error, not a
    // validation failure.
    let Json(value) = body.map_err(|e| ServerError::Internal(e.to_string()))?;

    // A non-object body has no fields, so validation reports all of them.
    let fields = value.as_object().cloned().unwrap_or_default();

    let missing = missing_fields(&fields);
    if !missing.is_empty() {
        return Err(ServerError::MissingFields(
            missing.into_iter().map(str::to_owned).collect(),
        ));
    }

    let pair = ServicePair::resolve(fields.get("defaultService").and_then(Value::as_str));

    let payload: EmailPayload = serde_json::from_value(Value::Object(fields))
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    let default = state.provider_for(pair.default);
    if let Err(default_err) = default.send(&payload).await {
        warn!(
            provider = %pair.default,
            error = %default_err,
            "default service failed, trying fallback"
        );

        let fallback = state.provider_for(pair.fallback);
        if let Err(fallback_err) = fallback.send(&payload).await {
            warn!(
                provider = %pair.fallback,
                error = %fallback_err,
                "fallback service failed"
            );
            return Err(ServerError::AllProvidersFailed);
        }

        return Ok((
            StatusCode::OK,
            Json(SendEmailResponse {
                message: format!(
                    "Email sent successfully with fallback service {}.",
                    pair.fallback
                ),
            }),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(SendEmailResponse {
            message: format!("Email sent successfully with {}.", pair.default),
        }),
    ))
}

/// Fallback for non-POST methods on the send route: answer 405 with the
/// offending method echoed in the error body.
pub async fn method_not_allowed(method: Method) -> ServerError {
    ServerError::MethodNotAllowed(method.to_string())
}
