//! Listing and resolving files inside snapshot directories.
//!
//! File names exposed to clients are `<snapshot dir>/<file>`, relative to the
//! output root. Nothing outside a `critical_data_*` directory is reachable.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;
use crate::snapshot::SNAPSHOT_PREFIX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotFile {
    /// `<snapshot dir>/<file>`.
    pub name: String,
    pub size_bytes: u64,
}

/// Every file in every snapshot directory under `root`, sorted by name.
///
/// A missing root is an empty listing.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if a directory cannot be read.
pub fn list_snapshot_files(root: &Path) -> Result<Vec<SnapshotFile>, ExportError> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ExportError::io(root, e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExportError::io(root, e))?;
        let dir_name = entry.file_name().to_string_lossy().into_owned();
        if !dir_name.starts_with(SNAPSHOT_PREFIX) || !entry.path().is_dir() {
            continue;
        }

        let dir = entry.path();
        for file in fs::read_dir(&dir).map_err(|e| ExportError::io(&dir, e))? {
            let file = file.map_err(|e| ExportError::io(&dir, e))?;
            let metadata = file.metadata().map_err(|e| ExportError::io(file.path(), e))?;
            if !metadata.is_file() {
                continue;
            }
            files.push(SnapshotFile {
                name: format!("{dir_name}/{}", file.file_name().to_string_lossy()),
                size_bytes: metadata.len(),
            });
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Map a client-supplied `<snapshot dir>/<file>` name to a path under `root`.
///
/// # Errors
///
/// - [`ExportError::InvalidName`] unless the name is exactly two plain
///   components and the first is a snapshot directory
/// - [`ExportError::NotFound`] if no such file exists
pub fn resolve_download(root: &Path, name: &str) -> Result<PathBuf, ExportError> {
    let invalid = || ExportError::InvalidName(name.to_string());

    if name.contains('\\') {
        return Err(invalid());
    }
    let components: Vec<&str> = Path::new(name)
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str().ok_or_else(invalid),
            _ => Err(invalid()),
        })
        .collect::<Result<_, _>>()?;

    let [dir, file] = components.as_slice() else {
        return Err(invalid());
    };
    if !dir.starts_with(SNAPSHOT_PREFIX) {
        return Err(invalid());
    }

    let path = root.join(dir).join(file);
    if !path.is_file() {
        return Err(ExportError::NotFound(name.to_string()));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_traversal_and_odd_shapes() {
        let root = Path::new("/srv/satwatch");
        for name in [
            "",
            "metadata.json",
            "../etc/passwd",
            "critical_data_1/../../etc/passwd",
            "/critical_data_1/metadata.json",
            "critical_data_1/nested/metadata.json",
            "other_dir/metadata.json",
            "critical_data_1\\metadata.json",
            "./critical_data_1/metadata.json",
        ] {
            assert!(
                matches!(resolve_download(root, name), Err(ExportError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn missing_root_lists_nothing() {
        let files = list_snapshot_files(Path::new("/definitely/not/here")).unwrap();
        assert!(files.is_empty());
    }
}
