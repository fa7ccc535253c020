//! Built-in metric providers and the shared inputs they consume.
//!
//! Every provider implements [`InfoProvider`](crate::core::InfoProvider):
//! it extracts a current value, serializes it into the run record, and
//! summarizes the change against the most recent recording. Custom metric
//! types implement the same trait and plug into the runner alongside these.
//!
//! - [`ArtifactSizeProvider`]: byte size of the built artifact
//! - [`WarningCountProvider`]: compiler warnings found in the build log
//!
//! Shared inputs ([`ProjectInfo`], [`BuildLog`]) are seeded through
//! [`RunnerBuilder::shared_input`](crate::core::RunnerBuilder::shared_input)
//! and resolved by providers through the context.

pub mod artifact_size;
pub mod project;
pub mod warning_count;

pub use artifact_size::{ArtifactSizeArgs, ArtifactSizeProvider};
pub use project::{BuildLog, ProjectInfo};
pub use warning_count::WarningCountProvider;
