//! JSON-document-backed implementation of [`HistoryStore`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::HistoryStore;
use crate::core::RunRecord;
use crate::error::{Result, TrendError};

/// On-disk shape of the history: a single JSON object whose `data` array
/// holds run records, newest first. This exact shape is the durable
/// contract other tooling may read.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryDocument {
    data: Vec<RunRecord>,
}

/// History store persisting all runs as one JSON document at a configurable
/// path.
///
/// Loading tolerates a missing or unparsable file by treating history as
/// empty. Appending rewrites the whole document through a temporary sibling
/// file and a rename, so an interrupted write never truncates the previous
/// document. Single-writer access is assumed; concurrent runs against the
/// same path require external locking.
///
/// # Example
///
/// ```rust,no_run
/// use buildtrend::history::{FileHistory, HistoryStore};
/// use buildtrend::core::RunRecord;
///
/// let mut history = FileHistory::new("buildtrend-output/history.json");
/// history.append(RunRecord::new())?;
/// # Ok::<(), buildtrend::error::TrendError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    /// Creates a store backed by the document at `path`. The file and its
    /// parent directories are created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Vec<RunRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "no readable history, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_slice::<HistoryDocument>(&bytes) {
            Ok(document) => document.data,
            Err(err) => {
                let corrupt = TrendError::history_corrupt(err.to_string());
                warn!(path = %self.path.display(), error = %corrupt, "treating history as empty");
                Vec::new()
            }
        }
    }
}

impl HistoryStore for FileHistory {
    fn load(&self) -> Vec<RunRecord> {
        self.read_document()
    }

    fn append(&mut self, record: RunRecord) -> Result<()> {
        let mut data = self.read_document();
        data.insert(0, record);
        let document = HistoryDocument { data };

        let json = serde_json::to_vec_pretty(&document)
            .map_err(|err| TrendError::persistence(format!("history does not serialize: {err}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    TrendError::persistence(format!(
                        "cannot create {}: {err}",
                        parent.display()
                    ))
                })?;
            }
        }

        // Write beside the document and rename into place so a failed write
        // never leaves a truncated history behind.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, &json).map_err(|err| {
            TrendError::persistence(format!("cannot write {}: {err}", staging.display()))
        })?;
        fs::rename(&staging, &self.path).map_err(|err| {
            // Don't leave the staging file behind next to the document.
            let _ = fs::remove_file(&staging);
            TrendError::persistence(format!("cannot replace {}: {err}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), runs = document.data.len(), "persisted history");
        Ok(())
    }
}
