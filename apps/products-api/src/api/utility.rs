//! Welcome, docs redirect and application info

use axum::{Router, extract::State, response::Redirect, routing::get};
use core_config::AppInfo;

pub const TAG: &str = "Utility";

const WELCOME: &str = "Welcome to the Product Management API. See /docs for the API documentation.";

/// Friendly welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    responses((status = 200, description = "Welcome message", body = String, content_type = "text/plain"))
)]
pub async fn welcome() -> &'static str {
    WELCOME
}

/// Redirect to the Swagger UI
#[utoipa::path(
    get,
    path = "/docs",
    tag = TAG,
    responses((status = 303, description = "Redirect to /swagger-ui"))
)]
pub async fn docs() -> Redirect {
    Redirect::to("/swagger-ui")
}

/// Application name and version
#[utoipa::path(
    get,
    path = "/api/info",
    tag = TAG,
    responses((status = 200, description = "Application info", body = String, content_type = "text/plain"))
)]
pub async fn info(State(app): State<AppInfo>) -> String {
    format!("Product Management API: {} v{}", app.name, app.version)
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/docs", get(docs))
}

/// `GET /info`; the app nests it under `/api`.
pub fn info_router(app: AppInfo) -> Router {
    Router::new().route("/info", get(info)).with_state(app)
}
