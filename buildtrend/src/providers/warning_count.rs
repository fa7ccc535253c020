//! Number of compiler warnings emitted by the build.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::{Context, InfoProvider, Summary};
use crate::error::Result;
use crate::formatters::format_count;
use crate::providers::BuildLog;

// Matches one diagnostic line per warning; both `path:line: warning: ...`
// (rustc, clang) and bare `warning: ...` lines count.
static WARNING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[^\n]*\bwarning:").expect("warning pattern compiles"));

/// Counts compiler warnings in the seeded [`BuildLog`]. Growth is flagged
/// unfavorable.
///
/// Requires the [`BuildLog`] shared input; runs with no build log fail with
/// a dependency error rather than reporting zero warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarningCountProvider {
    count: u64,
}

impl WarningCountProvider {
    /// The number of warnings found.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl InfoProvider for WarningCountProvider {
    type Args = ();
    const IDENTIFIER: &'static str = "warning_count";

    fn extract(context: &mut Context, _args: Option<&Self::Args>) -> Result<Self> {
        let log = context.resolve::<BuildLog>()?;
        let count = WARNING_PATTERN.find_iter(log.contents()).count() as u64;
        Ok(Self { count })
    }

    fn summary(&self, previous: Option<&Self>, _args: Option<&Self::Args>) -> Summary {
        Summary::generic(
            "⚠️ Compiler warnings",
            self.count,
            previous.map(|p| p.count),
            true,
            format_count,
        )
    }
}
