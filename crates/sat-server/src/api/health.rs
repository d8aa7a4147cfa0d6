//! Banner and health check.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "satellite-extractor-api";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Satellite critical data extractor (Space-Track). See /extract, /files and /download/{file}."
            .to_string(),
    })
}

/// GET /health
///
/// Answers without touching the provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
