//! Prelude for commonly used types and traits in buildtrend.

pub use crate::core::{Context, InfoProvider, RunRecord, RunResult, Runner, Summary};
pub use crate::error::{Result, TrendError};
pub use crate::history::{FileHistory, HistoryStore, InMemoryHistory};
pub use crate::logging::LogConfig;
