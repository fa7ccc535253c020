//! # buildtrend - Build Metric Trends for Rust
//!
//! buildtrend collects per-build metrics for a software project (artifact
//! size, warning counts, and anything you can express as a provider),
//! compares each metric against its most recent historical recording, and
//! emits a human-readable trend summary plus a persisted execution history.
//!
//! ## Overview
//!
//! Point it at the things a build produces, run it after every build (CI or
//! local), and it tells you how the build is trending: did the artifact
//! grow, did warnings creep back in, did that number you care about move in
//! the wrong direction. Each run is appended to an append-only JSON history
//! so other tooling can chart the data.
//!
//! ## Quick Start
//!
//! ```rust
//! use buildtrend::prelude::*;
//! use buildtrend::providers::{BuildLog, WarningCountProvider};
//!
//! let mut history = InMemoryHistory::new();
//!
//! let result = Runner::builder()
//!     .shared_input(BuildLog::new("src/lib.rs:4: warning: unused import"))
//!     .provider::<WarningCountProvider>()
//!     .build()
//!     .run(&mut history);
//!
//! for line in result.record().summaries() {
//!     println!("{line}");
//! }
//! for line in result.record().errors() {
//!     eprintln!("{line}");
//! }
//! ```
//!
//! Swap [`InMemoryHistory`](history::InMemoryHistory) for
//! [`FileHistory`](history::FileHistory) to persist runs between builds.
//!
//! ## Key Concepts
//!
//! ### Providers
//!
//! A provider is a pluggable metric type: it extracts a current value,
//! serializes it into the run record, and diffs it against the previous
//! recording. Implement [`InfoProvider`](core::InfoProvider) to add your
//! own; the built-ins live in [`providers`].
//!
//! ### Typed context cache
//!
//! Providers can consume each other's results (and caller-seeded shared
//! inputs) through a per-run, type-keyed, memoizing
//! [`Context`](core::Context): no hard-wired dependency graph, and each
//! provider extracts at most once per run no matter how many others depend
//! on it.
//!
//! ### Partial failure
//!
//! One provider failing never aborts the run. Its error is recorded in the
//! run record; independent providers still execute, and providers that
//! depended on the failed one fail with a dependency error of their own.
//!
//! ### History
//!
//! Runs are stored newest-first in a single JSON document of shape
//! `{"data": [...]}`; see [`history`] for the durable contract.
//!
//! ## Architecture
//!
//! - **[`core`]**: the execution engine: runner, provider protocol,
//!   context cache, run records, summaries
//! - **[`history`]**: append-only run history storage backends
//! - **[`providers`]**: built-in providers and shared inputs
//! - **[`formatters`]**: value formatting helpers
//! - **[`logging`]**: tracing configuration
//! - **[`error`]**: the error taxonomy

pub mod core;
pub mod error;
pub mod formatters;
pub mod history;
pub mod logging;
pub mod prelude;
pub mod providers;
