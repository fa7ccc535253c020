//! Core engine types for buildtrend.
//!
//! This module contains the building blocks of the metric-provider
//! execution engine:
//!
//! - **[`Runner`]**: drives a configured sequence of providers through one run
//! - **[`InfoProvider`]**: the protocol every metric type implements
//! - **[`Context`]**: per-run memoized, type-keyed cache enabling
//!   inter-provider dependencies
//! - **[`RunRecord`]**: the aggregated result of one run (raw values,
//!   summaries, errors)
//! - **[`Summary`]**: a metric's current value and its change since the
//!   last run
//!
//! ## Architecture
//!
//! ```text
//! Runner
//!     ├── Context (shared inputs + provider outputs, memoized by type)
//!     ├── InfoProvider::extract  ──▶ RunRecord raw values
//!     ├── InfoProvider::summary  ──▶ RunRecord summaries
//!     └── HistoryStore::append(RunRecord)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use buildtrend::core::Runner;
//! use buildtrend::history::InMemoryHistory;
//! use buildtrend::providers::{BuildLog, WarningCountProvider};
//!
//! let mut history = InMemoryHistory::new();
//! let result = Runner::builder()
//!     .shared_input(BuildLog::new("lib.rs:10: warning: dead code"))
//!     .provider::<WarningCountProvider>()
//!     .build()
//!     .run(&mut history);
//!
//! for line in result.record().summaries() {
//!     println!("{line}");
//! }
//! ```

pub mod context;
pub mod provider;
pub mod record;
pub mod runner;
pub mod summary;

pub use context::Context;
pub use provider::InfoProvider;
pub use record::{RunRecord, SUMMARIES_KEY};
pub use runner::{RunResult, Runner, RunnerBuilder};
pub use summary::{Summary, Trend};
