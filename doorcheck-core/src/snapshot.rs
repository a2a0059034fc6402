//! Snapshot persistence for the checklist
//!
//! One JSON file holds the serialized list. Loading is infallible from the
//! caller's point of view: a missing, unreadable, or invalid snapshot falls
//! back to the seed list with a log line, never an error state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::item::Checklist;

/// File name of the snapshot inside the data directory
pub const SNAPSHOT_FILE: &str = "checklist.json";

/// Default snapshot location under the platform-local data dir
pub fn default_data_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("doorcheck")
        .join(SNAPSHOT_FILE)
}

/// Errors that can occur while writing the snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Failed to write the snapshot file or create its parent directory.
    #[error("failed to write snapshot at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to serialize the list to JSON.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Wraps the single blob slot the checklist is persisted in
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, falling back to the seed list when the file is
    /// missing or does not hold a valid list
    pub fn load(&self) -> Checklist {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot, starting from the seed list");
                return Checklist::seed();
            }
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "snapshot unreadable, starting from the seed list"
                );
                return Checklist::seed();
            }
        };
        match serde_json::from_str::<Checklist>(&raw) {
            Ok(list) if list.is_valid() => list,
            Ok(_) => {
                warn!(
                    path = %self.path.display(),
                    "snapshot holds an invalid list, starting from the seed list"
                );
                Checklist::seed()
            }
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "snapshot unparseable, starting from the seed list"
                );
                Checklist::seed()
            }
        }
    }

    /// Serialize the full list and overwrite the snapshot unconditionally
    pub fn save(&self, list: &Checklist) -> Result<(), SnapshotError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| SnapshotError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(list)?;
        fs::write(&self.path, json).map_err(|source| SnapshotError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
