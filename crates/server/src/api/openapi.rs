use super::schemas::{
    ErrorResponse, HealthResponse, ProvidersHealth, SendEmailRequest, SendEmailResponse,
};

use super::{health, send};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Mailbridge API",
        version = "0.1.0",
        description = "HTTP API for the Mailbridge email relay. Sends transactional email through Mailgun or Sendgrid with automatic single-step fallback.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Send", description = "Email dispatch with provider fallback")
    ),
    paths(health::health, send::send_email),
    components(schemas(
        SendEmailRequest,
        SendEmailResponse,
        ErrorResponse,
        HealthResponse,
        ProvidersHealth,
    ))
)]
pub struct ApiDoc;
