//! GET /extract

use axum::{Json, extract::State};
use sat_core::{ExtractionMetadata, RiskSummary};
use serde::Serialize;

use crate::AppState;
use crate::error::ApiResult;
use crate::service::extract_and_save;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub status: &'static str,
    pub metadata: ExtractionMetadata,
    pub stats: RiskSummary,
    /// Snapshot directory the CSV files and `metadata.json` were written to.
    pub csv_output_dir: String,
}

/// Run one extraction with the configured account and write a snapshot.
///
/// Each request opens its own provider session.
pub async fn extract(State(state): State<AppState>) -> ApiResult<Json<ExtractResponse>> {
    let outcome = extract_and_save(&state.config).await.inspect_err(|e| {
        tracing::error!(error = %e, "extraction request failed");
    })?;

    Ok(Json(ExtractResponse {
        status: "success",
        metadata: outcome.report.bundle.metadata,
        stats: outcome.report.risk_summary,
        csv_output_dir: outcome.snapshot.dir.display().to_string(),
    }))
}
