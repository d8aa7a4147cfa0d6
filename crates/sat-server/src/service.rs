//! Extraction run shared by `GET /extract` and `satwatch extract`.

use std::time::Duration;

use sat_config::SatConfig;
use sat_core::ExtractionReport;
use sat_export::{ExportError, Snapshot, SnapshotWriter};
use sat_spacetrack::{ExtractionPipeline, HttpTransport, PipelineError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("failed to write snapshot: {0}")]
    Export(#[from] ExportError),

    #[error("snapshot task panicked: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A completed run and where its snapshot landed.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub report: ExtractionReport,
    pub snapshot: Snapshot,
}

/// Run one extraction with a fresh provider session and write the snapshot
/// under `config.output.root_dir`.
///
/// # Errors
///
/// Returns [`ServiceError`] if the client cannot be built, the pipeline
/// fails, or the snapshot cannot be written.
pub async fn extract_and_save(config: &SatConfig) -> Result<ExtractionOutcome, ServiceError> {
    let transport = HttpTransport::new(
        &config.spacetrack.base_url,
        Duration::from_secs(config.spacetrack.timeout_secs),
    )
    .map_err(ServiceError::Client)?;
    tracing::info!(provider = transport.base_url(), "starting extraction");

    let report = ExtractionPipeline::new(transport)
        .run(&config.spacetrack.credentials())
        .await?;
    if report.bundle.is_empty() {
        tracing::warn!("provider returned no records in any category");
    }

    let writer = SnapshotWriter::new(config.output.root_dir.clone());
    let (report, snapshot) = tokio::task::spawn_blocking(move || {
        let snapshot = writer.write(&report.bundle)?;
        Ok::<_, ExportError>((report, snapshot))
    })
    .await??;

    Ok(ExtractionOutcome { report, snapshot })
}
