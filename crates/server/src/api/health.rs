use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use super::AppState;
use super::schemas::{HealthResponse, ProvidersHealth};

/// `GET /health` -- report overall and per-provider health.
///
/// Providers report `ok` or a description of why they are unusable (e.g. a
/// missing API key). The endpoint itself always answers 200; `status` is
/// `degraded` when either provider is unhealthy.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    summary = "Health check",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let mailgun = status_of(state.mailgun.health_check().await);
    let sendgrid = status_of(state.sendgrid.health_check().await);

    let status = if mailgun == "ok" && sendgrid == "ok" {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_owned(),
        providers: ProvidersHealth { mailgun, sendgrid },
    })
}

fn status_of(result: Result<(), mailbridge_provider::ProviderError>) -> String {
    match result {
        Ok(()) => "ok".to_owned(),
        Err(e) => e.to_string(),
    }
}
