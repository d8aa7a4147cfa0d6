//! Snapshot output configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory under which `critical_data_*` snapshot directories are created.
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
        }
    }
}
