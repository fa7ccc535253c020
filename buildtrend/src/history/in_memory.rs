//! In-memory implementation of [`HistoryStore`] for testing and development.

use super::HistoryStore;
use crate::core::RunRecord;
use crate::error::{Result, TrendError};

/// In-memory history store.
///
/// Useful for tests, examples, and callers that want a dry run without
/// touching the filesystem.
///
/// # Example
///
/// ```rust
/// use buildtrend::history::{HistoryStore, InMemoryHistory};
/// use buildtrend::core::RunRecord;
///
/// let mut history = InMemoryHistory::new();
/// history.append(RunRecord::new()).unwrap();
/// assert_eq!(history.load().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    records: Vec<RunRecord>,
    fail_appends: bool,
}

impl InMemoryHistory {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history pre-populated with records, newest first.
    pub fn with_records(records: Vec<RunRecord>) -> Self {
        Self {
            records,
            fail_appends: false,
        }
    }

    /// Creates a history that rejects every append, for exercising
    /// persistence-failure handling.
    pub fn failing_appends() -> Self {
        Self {
            records: Vec::new(),
            fail_appends: true,
        }
    }
}

impl HistoryStore for InMemoryHistory {
    fn load(&self) -> Vec<RunRecord> {
        self.records.clone()
    }

    fn append(&mut self, record: RunRecord) -> Result<()> {
        if self.fail_appends {
            return Err(TrendError::persistence(
                "in-memory history is configured to fail appends",
            ));
        }
        self.records.insert(0, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn append_prepends_newest_first() {
        let mut history = InMemoryHistory::new();

        let mut first = RunRecord::new();
        first.insert_raw("warning_count", json!(10));
        history.append(first).unwrap();

        let mut second = RunRecord::new();
        second.insert_raw("warning_count", json!(7));
        history.append(second).unwrap();

        assert_eq!(history.previous_value("warning_count"), Some(json!(7)));
        assert_eq!(history.load().len(), 2);
    }

    #[test]
    fn previous_value_is_absent_for_unknown_identifier() {
        let mut history = InMemoryHistory::new();
        history.append(RunRecord::new()).unwrap();
        assert!(history.previous_value("artifact_size").is_none());
    }

    #[test]
    fn failing_store_rejects_appends() {
        let mut history = InMemoryHistory::failing_appends();
        let err = history.append(RunRecord::new()).unwrap_err();
        assert!(matches!(err, TrendError::Persistence(_)));
    }
}
