//! Persisted execution history: an append-only ordered log of past runs.
//!
//! This module provides the storage contract for run records and two
//! backends: a single-JSON-document file store for real use and an
//! in-memory store for tests and development.

use serde_json::Value;

use crate::core::RunRecord;
use crate::error::Result;

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryHistory;
pub use json_file::FileHistory;

/// Storage backend for the append-only run history.
///
/// The history owns the full sequence of past run records, newest first.
/// Records are never mutated after being appended; growth is unbounded by
/// design (retention policy is out of scope).
pub trait HistoryStore {
    /// Returns all recorded runs, newest first.
    ///
    /// Missing or corrupt storage yields an empty sequence, never an error:
    /// a fresh project has no history.
    fn load(&self) -> Vec<RunRecord>;

    /// Prepends `record` and persists the whole history.
    ///
    /// Corrupt prior content falls back to an empty history rather than
    /// failing the append.
    fn append(&mut self, record: RunRecord) -> Result<()>;

    /// The most recent run, if any.
    fn most_recent(&self) -> Option<RunRecord> {
        self.load().into_iter().next()
    }

    /// The raw value recorded for `identifier` in the most recent run.
    ///
    /// This is what the runner diffs a provider's fresh extraction against.
    fn previous_value(&self, identifier: &str) -> Option<Value> {
        self.most_recent()
            .and_then(|record| record.raw_value(identifier).cloned())
    }
}
