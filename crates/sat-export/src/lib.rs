//! # sat-export
//!
//! Persists extraction results as snapshot directories and serves them back.
//!
//! ```text
//! <root>/critical_data_20240501_120000/
//!     active_tle.csv      (only if there were active objects)
//!     debris_tle.csv      (only if there was debris)
//!     critical_cdm.csv    (only if there were conjunction events)
//!     metadata.json
//! ```
//!
//! All functions here do blocking filesystem I/O.

mod error;
mod files;
mod snapshot;

pub use error::ExportError;
pub use files::{SnapshotFile, list_snapshot_files, resolve_download};
pub use snapshot::{
    ACTIVE_FILE, CONJUNCTION_FILE, DEBRIS_FILE, METADATA_FILE, SNAPSHOT_PREFIX, Snapshot,
    SnapshotWriter, snapshot_dir_name,
};
