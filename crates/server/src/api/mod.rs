pub mod health;
pub mod openapi;
pub mod schemas;
pub mod send;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use mailbridge_core::ServiceKind;
use mailbridge_provider::DynEmailProvider;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use self::openapi::ApiDoc;

/// Shared application state passed to all handlers.
///
/// Both providers are constructed once at startup from an immutable
/// configuration snapshot and are stateless afterwards; requests only read
/// from this state.
#[derive(Clone)]
pub struct AppState {
    /// The Mailgun provider.
    pub mailgun: Arc<dyn DynEmailProvider>,
    /// The Sendgrid provider.
    pub sendgrid: Arc<dyn DynEmailProvider>,
}

impl AppState {
    /// Returns the provider registered for the given service.
    pub fn provider_for(&self, kind: ServiceKind) -> Arc<dyn DynEmailProvider> {
        match kind {
            ServiceKind::Mailgun => Arc::clone(&self.mailgun),
            ServiceKind::Sendgrid => Arc::clone(&self.sendgrid),
        }
    }
}

/// Build the Axum router with all API routes, middleware, and Swagger UI.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Non-POST requests on the send route get the explicit 405 body
        // rather than axum's default empty response.
        .route(
            "/v1/send",
            post(send::send_email).fallback(send::method_not_allowed),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
