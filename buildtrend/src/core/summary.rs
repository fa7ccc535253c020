//! Human-readable deltas between a current and a previously recorded value.

use std::fmt;
use std::ops::Sub;

/// Direction of change relative to the previous recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increased,
    Decreased,
    Unchanged,
}

/// The rendered delta portion of a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Delta {
    amount: String,
    previous: String,
    trend: Trend,
    unfavorable: bool,
}

/// A structured description of a metric's current value and its change since
/// the last run.
///
/// Summaries are derived, immutable values; only their rendered string form
/// is ever persisted. Construction is a pure function of its inputs, so
/// identical inputs always yield identical summaries.
///
/// # Example
///
/// ```rust
/// use buildtrend::core::Summary;
/// use buildtrend::formatters::format_bytes;
///
/// let summary = Summary::generic("📦 Artifact size", 2_500_000u64, Some(2_000_000), true, format_bytes);
/// assert_eq!(
///     summary.to_string(),
///     "📦 Artifact size: 2.5 MB (↑ 500.0 KB from 2.0 MB ⚠️)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    description: String,
    current: String,
    delta: Option<Delta>,
}

impl Summary {
    /// Builds a summary comparing `now` against an optional previous value.
    ///
    /// With no previous value the summary reports only the current value and
    /// carries no delta. Otherwise the signed delta is computed generically
    /// over any ordered, subtractable value type, and both endpoints plus the
    /// delta magnitude are rendered through `format`.
    ///
    /// `increase_is_bad` flags which direction of change is unfavorable; it
    /// affects presentation only, never the computed delta.
    pub fn generic<V, F>(
        description: impl Into<String>,
        now: V,
        old: Option<V>,
        increase_is_bad: bool,
        format: F,
    ) -> Self
    where
        V: Copy + PartialOrd + Sub<Output = V>,
        F: Fn(V) -> String,
    {
        let description = description.into();
        let current = format(now);

        let Some(old) = old else {
            return Self {
                description,
                current,
                delta: None,
            };
        };

        let trend = if now > old {
            Trend::Increased
        } else if now < old {
            Trend::Decreased
        } else {
            Trend::Unchanged
        };
        // Subtract the smaller endpoint from the larger one so unsigned
        // value types never underflow.
        let amount = match trend {
            Trend::Increased => now - old,
            _ => old - now,
        };
        let unfavorable = match trend {
            Trend::Increased => increase_is_bad,
            Trend::Decreased => !increase_is_bad,
            Trend::Unchanged => false,
        };

        Self {
            description,
            current,
            delta: Some(Delta {
                amount: format(amount),
                previous: format(old),
                trend,
                unfavorable,
            }),
        }
    }

    /// The metric description, e.g. `"📦 Artifact size"`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The formatted current value.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// The formatted previous value, absent on the first recording.
    pub fn previous(&self) -> Option<&str> {
        self.delta.as_ref().map(|delta| delta.previous.as_str())
    }

    /// The direction of change, absent on the first recording.
    pub fn trend(&self) -> Option<Trend> {
        self.delta.as_ref().map(|delta| delta.trend)
    }

    /// Whether the recorded change is flagged unfavorable.
    pub fn is_unfavorable(&self) -> bool {
        self.delta
            .as_ref()
            .map(|delta| delta.unfavorable)
            .unwrap_or(false)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.current)?;
        let Some(delta) = &self.delta else {
            return Ok(());
        };
        match delta.trend {
            Trend::Unchanged => write!(f, " (no change)"),
            trend => {
                let arrow = match trend {
                    Trend::Increased => "↑",
                    _ => "↓",
                };
                let marker = if delta.unfavorable { " ⚠️" } else { "" };
                write!(f, " ({arrow} {} from {}{marker})", delta.amount, delta.previous)
            }
        }
    }
}
