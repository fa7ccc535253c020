//! Error types for the buildtrend engine.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, TrendError>;

/// Errors that can occur while extracting metrics or persisting history.
///
/// Extraction and dependency failures are contained per provider: the runner
/// records them as error strings inside the [`RunRecord`](crate::core::RunRecord)
/// and keeps going. Persistence failures surface to the caller of the run.
#[derive(Error, Debug)]
pub enum TrendError {
    /// A provider could not compute its value (missing external resource,
    /// malformed input).
    #[error("extraction failed: {0}")]
    Extraction(String),

    /// A requested value was never produced because its producing provider
    /// failed, was not configured, or forms a cycle.
    #[error("dependency failed: {0}")]
    DependencyFailed(String),

    /// The run history could not be written.
    #[error("failed to persist history: {0}")]
    Persistence(String),

    /// The persisted history document does not parse. Recovered at load time
    /// by treating history as empty; never fatal.
    #[error("history document is corrupt: {0}")]
    HistoryCorrupt(String),
}

impl TrendError {
    /// Creates an extraction error with the given message.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    /// Creates a dependency failure with the given message.
    pub fn dependency_failed(msg: impl Into<String>) -> Self {
        Self::DependencyFailed(msg.into())
    }

    /// Creates a persistence error with the given message.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Creates a corrupt-history error with the given message.
    pub fn history_corrupt(msg: impl Into<String>) -> Self {
        Self::HistoryCorrupt(msg.into())
    }

    /// The bare message, without the variant prefix. Used when replaying a
    /// cached failure so the prefix is not applied twice.
    pub(crate) fn message(&self) -> &str {
        match self {
            Self::Extraction(msg)
            | Self::DependencyFailed(msg)
            | Self::Persistence(msg)
            | Self::HistoryCorrupt(msg) => msg,
        }
    }
}
