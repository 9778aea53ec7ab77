//! Load and save [`DashboardData`] as JSON snapshots.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::DashboardData;
use crate::metrics::MetricError;

/// Errors raised while reading a dashboard snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file.
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the snapshot file.
    #[error("Failed to write snapshot {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The snapshot is not valid JSON for the dashboard shape.
    #[error("Invalid snapshot JSON at {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Failed to serialize the snapshot.
    #[error("Failed to serialize snapshot: {0}")]
    SerializeJson(#[source] serde_json::Error),
    /// The snapshot parsed but violates a record invariant.
    #[error("Snapshot {path} rejected: {source}")]
    Invalid {
        path: PathBuf,
        source: MetricError,
    },
}

/// Read and validate a snapshot from disk.
pub fn load_from_path(path: &Path) -> Result<DashboardData, SnapshotError> {
    let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data: DashboardData =
        serde_json::from_str(&text).map_err(|source| SnapshotError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;
    data.validate().map_err(|source| SnapshotError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Loaded dashboard snapshot");
    Ok(data)
}

/// Write a snapshot as pretty-printed JSON.
pub fn save_to_path(data: &DashboardData, path: &Path) -> Result<(), SnapshotError> {
    let text = serde_json::to_string_pretty(data).map_err(SnapshotError::SerializeJson)?;
    std::fs::write(path, text).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })
}
