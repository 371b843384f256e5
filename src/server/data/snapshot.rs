//! File-backed store for the growth history.
//!
//! The whole history is one JSON document holding the fine-grained and daily logs.
//! Reads never fail: a missing or unreadable file is treated as "no history yet".
//! Writes replace the file atomically by writing a temporary file in the same
//! directory and renaming it over the target.

use dioxus_logger::tracing;
use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

use crate::server::{error::AppError, model::snapshot::SnapshotLogs};

/// Store owning the growth history file.
///
/// Assumes a single writer; two processes sharing one file will overwrite each
/// other's history.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store for the file at `path`. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads both snapshot logs from disk.
    ///
    /// A missing file, an unreadable file and malformed JSON all yield empty logs.
    /// Files written by the earlier deployment format are accepted, see
    /// `SnapshotLogs`.
    ///
    /// # Returns
    /// - `SnapshotLogs` - Persisted logs, or empty logs when nothing usable is on disk
    pub fn load(&self) -> SnapshotLogs {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "No growth history at {}, starting with empty history",
                    self.path.display()
                );
                return SnapshotLogs::default();
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to read growth history at {}, starting with empty history: {}",
                    self.path.display(),
                    e
                );
                return SnapshotLogs::default();
            }
        };

        match serde_json::from_str::<SnapshotLogs>(&contents) {
            Ok(logs) => {
                tracing::debug!(
                    "Loaded {} fine-grained and {} daily snapshots from {}",
                    logs.fine_grained.len(),
                    logs.daily.len(),
                    self.path.display()
                );
                logs
            }
            Err(e) => {
                tracing::warn!(
                    "Growth history at {} is malformed, starting with empty history: {}",
                    self.path.display(),
                    e
                );
                SnapshotLogs::default()
            }
        }
    }

    /// Writes both snapshot logs to disk as one document.
    ///
    /// Creates missing parent directories. The previous file stays intact until the
    /// new contents are fully written and synced.
    ///
    /// # Arguments
    /// - `logs` - Logs to persist
    ///
    /// # Returns
    /// - `Ok(())` - File replaced with the new contents
    /// - `Err(AppError::IoErr)` - Directory, temporary file, sync or rename failed
    /// - `Err(AppError::JsonErr)` - Serialization failed
    pub fn save(&self, logs: &SnapshotLogs) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, logs)?;
            writer.flush()?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        tracing::trace!(
            "Saved {} fine-grained and {} daily snapshots to {}",
            logs.fine_grained.len(),
            logs.daily.len(),
            self.path.display()
        );

        Ok(())
    }
}
