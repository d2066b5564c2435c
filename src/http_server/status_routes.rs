//! Status HTTP Routes
//!
//! Welcome page and health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create status routes
pub fn status_routes() -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
}

/// Welcome page at the root path
async fn home_handler() -> &'static str {
    "Welcome To My Fitness Center Management System!"
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
