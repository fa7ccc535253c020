//! Run records: the aggregated result of one engine execution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved key under which a record's rendered summaries are persisted,
/// alongside the provider raw values, inside the same JSON object. The
/// runner builder rejects any provider identifier that collides with it.
pub const SUMMARIES_KEY: &str = "buildtrend_run_summaries";

/// The full result of one engine execution: the serialized value of every
/// provider that succeeded, the rendered summary strings in configured
/// order, and the error messages of every provider that failed.
///
/// A record is assembled by the runner and immutable once the run completes.
/// On the wire it is a single JSON object mapping provider identifiers to
/// their raw values, plus [`SUMMARIES_KEY`] for the rendered summaries;
/// errors are not persisted, so records read back from history always carry
/// an empty error list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Rendered summary strings, one per succeeded provider.
    #[serde(rename = "buildtrend_run_summaries", default)]
    summaries: Vec<String>,

    /// Serialized provider values keyed by provider identifier.
    #[serde(flatten)]
    raw: BTreeMap<String, Value>,

    /// Error messages of failed providers. In-memory only.
    #[serde(skip)]
    errors: Vec<String>,
}

impl RunRecord {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the serialized value a provider extracted this run.
    pub fn insert_raw(&mut self, identifier: impl Into<String>, value: Value) {
        self.raw.insert(identifier.into(), value);
    }

    /// The raw value recorded for `identifier`, if that provider succeeded.
    pub fn raw_value(&self, identifier: &str) -> Option<&Value> {
        self.raw.get(identifier)
    }

    /// All recorded raw values, keyed by provider identifier.
    pub fn raw_values(&self) -> &BTreeMap<String, Value> {
        &self.raw
    }

    /// Appends a rendered summary string.
    pub fn push_summary(&mut self, rendered: impl Into<String>) {
        self.summaries.push(rendered.into());
    }

    /// Appends an error message for a failed provider.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Rendered summaries in configured provider order.
    pub fn summaries(&self) -> &[String] {
        &self.summaries
    }

    /// Error messages in configured provider order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
