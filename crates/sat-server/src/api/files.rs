//! Snapshot listing and download.

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use sat_export::{SnapshotFile, list_snapshot_files, resolve_download};
use serde::Serialize;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Serialize)]
pub struct FilesResponse {
    pub files: Vec<SnapshotFile>,
}

/// GET /files
pub async fn list_files(State(state): State<AppState>) -> ApiResult<Json<FilesResponse>> {
    let root = state.config.output.root_dir.clone();
    let files = tokio::task::spawn_blocking(move || list_snapshot_files(&root))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))??;
    Ok(Json(FilesResponse { files }))
}

/// GET /download/{*name}
///
/// `name` is `<snapshot dir>/<file>` as listed by `/files`.
pub async fn download(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let root = state.config.output.root_dir.clone();
    let (file_name, bytes) = tokio::task::spawn_blocking(move || read_snapshot_file(&root, &name))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))??;

    Ok((
        [
            (header::CONTENT_TYPE, content_type(&file_name).to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    ))
}

/// Blocking: resolve `name` under `root` and read it whole.
fn read_snapshot_file(root: &std::path::Path, name: &str) -> ApiResult<(String, Vec<u8>)> {
    let path = resolve_download(root, name)?;
    let bytes = std::fs::read(&path)
        .map_err(|e| ApiError::internal(format!("failed to read {name}: {e}")))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((file_name, bytes))
}

fn content_type(file_name: &str) -> &'static str {
    if file_name.ends_with(".csv") {
        "text/csv"
    } else if file_name.ends_with(".json") {
        "application/json"
    } else {
        "application/octet-stream"
    }
}
