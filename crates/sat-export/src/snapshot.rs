//! Snapshot writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use sat_core::ResultBundle;
use serde::Serialize;

use crate::error::ExportError;

pub const SNAPSHOT_PREFIX: &str = "critical_data_";
pub const ACTIVE_FILE: &str = "active_tle.csv";
pub const DEBRIS_FILE: &str = "debris_tle.csv";
pub const CONJUNCTION_FILE: &str = "critical_cdm.csv";
pub const METADATA_FILE: &str = "metadata.json";

/// Directory name for a snapshot taken at `timestamp`.
#[must_use]
pub fn snapshot_dir_name(timestamp: DateTime<Utc>) -> String {
    format!("{SNAPSHOT_PREFIX}{}", timestamp.format("%Y%m%d_%H%M%S"))
}

/// A written snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub dir: PathBuf,
    /// File names inside `dir`, in write order.
    pub files: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    root: PathBuf,
}

impl SnapshotWriter {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bundle` into a new snapshot directory under the root.
    ///
    /// Empty categories get no CSV file; `metadata.json` is always written.
    /// A snapshot from the same second is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the directory or a file cannot be written.
    pub fn write(&self, bundle: &ResultBundle) -> Result<Snapshot, ExportError> {
        let dir = self
            .root
            .join(snapshot_dir_name(bundle.metadata.extraction_timestamp));
        fs::create_dir_all(&dir).map_err(|e| ExportError::io(&dir, e))?;

        let mut files = Vec::new();
        if write_csv(&dir.join(ACTIVE_FILE), &bundle.active_objects)? {
            files.push(ACTIVE_FILE.to_string());
        }
        if write_csv(&dir.join(DEBRIS_FILE), &bundle.debris)? {
            files.push(DEBRIS_FILE.to_string());
        }
        if write_csv(&dir.join(CONJUNCTION_FILE), &bundle.conjunctions)? {
            files.push(CONJUNCTION_FILE.to_string());
        }

        let metadata_path = dir.join(METADATA_FILE);
        let file = File::create(&metadata_path).map_err(|e| ExportError::io(&metadata_path, e))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, &bundle.metadata)?;
        out.flush().map_err(|e| ExportError::io(&metadata_path, e))?;
        files.push(METADATA_FILE.to_string());

        tracing::info!(dir = %dir.display(), files = files.len(), "snapshot written");
        Ok(Snapshot { dir, files })
    }
}

/// Returns whether a file was written.
fn write_csv<R: Serialize>(path: &Path, records: &[R]) -> Result<bool, ExportError> {
    if records.is_empty() {
        return Ok(false);
    }
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| ExportError::io(path, e))?;
    Ok(true)
}
