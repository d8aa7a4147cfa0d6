//! # sat-server
//!
//! HTTP shell and command-line front end for satwatch.
//!
//! The router is built from an [`AppState`] so tests can drive it with
//! `tower::ServiceExt::oneshot` without binding a socket.

use std::sync::Arc;

use axum::Router;
use sat_config::SatConfig;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod service;
pub mod stats;

pub use error::{ApiError, ApiResult};
pub use service::{ExtractionOutcome, ServiceError, extract_and_save};

/// Application state shared across HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<SatConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: SatConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::root))
        .route("/extract", get(api::extract))
        .route("/files", get(api::list_files))
        .route("/download/{*name}", get(api::download))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
