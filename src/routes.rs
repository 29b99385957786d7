/// Route definitions
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::metrics;
use crate::openapi::ApiDoc;
use crate::AppState;

/// Build the service router. Tests drive this router directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/token", post(handlers::issue_token))
        .route("/users/me", get(handlers::me))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
