//! The execution engine that drives configured providers through one run.

use std::collections::HashSet;

use tracing::{debug, error, info};

use super::provider::ConfiguredProvider;
use super::{Context, InfoProvider, RunRecord, SUMMARIES_KEY};
use crate::error::TrendError;
use crate::history::HistoryStore;

/// The outcome of one run.
///
/// Both arms carry the assembled record: an individual provider failure
/// never aborts the run, and even when persisting the history fails the
/// in-memory record stays available to the caller for display.
#[derive(Debug)]
pub enum RunResult {
    /// The record was appended to history.
    Persisted { record: RunRecord },
    /// The record was assembled but could not be persisted.
    PersistFailed { record: RunRecord, error: TrendError },
}

impl RunResult {
    /// The assembled run record, regardless of persistence outcome.
    pub fn record(&self) -> &RunRecord {
        match self {
            Self::Persisted { record } | Self::PersistFailed { record, .. } => record,
        }
    }

    /// Consumes the result, returning the run record.
    pub fn into_record(self) -> RunRecord {
        match self {
            Self::Persisted { record } | Self::PersistFailed { record, .. } => record,
        }
    }

    /// Whether the record made it into history.
    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted { .. })
    }
}

/// Drives a configured sequence of providers through one run.
///
/// Providers execute strictly sequentially in configured order. Each one
/// resolves its inputs through the per-run [`Context`], extracts its current
/// value, and is diffed against the most recent history entry; failures are
/// contained per provider. The assembled [`RunRecord`] is appended to the
/// given history store when all providers have been processed.
///
/// # Example
///
/// ```rust
/// use buildtrend::history::InMemoryHistory;
/// use buildtrend::providers::{BuildLog, WarningCountProvider};
/// use buildtrend::core::Runner;
///
/// let mut history = InMemoryHistory::new();
/// let result = Runner::builder()
///     .shared_input(BuildLog::new("main.rs:3: warning: unused variable"))
///     .provider::<WarningCountProvider>()
///     .build()
///     .run(&mut history);
///
/// assert!(result.is_persisted());
/// assert_eq!(result.record().summaries().len(), 1);
/// ```
pub struct Runner {
    providers: Vec<ConfiguredProvider>,
    context: Context,
}

impl Runner {
    /// Starts building a runner.
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::default()
    }

    /// Executes one run against the given history store.
    ///
    /// Consumes the runner: the context cache and the configured extraction
    /// closures are single-use by design. Configure a fresh runner per run.
    pub fn run(self, history: &mut dyn HistoryStore) -> RunResult {
        let Runner {
            providers,
            mut context,
        } = self;

        info!(providers = providers.len(), "starting run");

        // Register every configured producer up front so providers can
        // depend on each other regardless of configured order.
        let mut slots = Vec::with_capacity(providers.len());
        for provider in providers {
            (provider.register)(&mut context);
            slots.push((provider.identifier, provider.execute));
        }

        let previous = history.most_recent();
        let mut record = RunRecord::new();
        for (identifier, execute) in slots {
            debug!(provider = identifier, "running provider");
            execute(&mut context, previous.as_ref(), &mut record);
        }

        info!(
            values = record.raw_values().len(),
            errors = record.errors().len(),
            "run complete"
        );

        match history.append(record.clone()) {
            Ok(()) => RunResult::Persisted { record },
            Err(err) => {
                error!(error = %err, "failed to persist run record");
                RunResult::PersistFailed { record, error: err }
            }
        }
    }
}

/// Builder for [`Runner`]: the ordered provider list, per-provider
/// arguments, and seeded shared inputs.
#[derive(Default)]
pub struct RunnerBuilder {
    providers: Vec<ConfiguredProvider>,
    context: Context,
    identifiers: HashSet<&'static str>,
}

impl RunnerBuilder {
    /// Appends a provider with no arguments to the run sequence.
    ///
    /// # Panics
    ///
    /// Panics if a provider with the same identifier is already configured
    /// (identifiers must be unique within a run), or if the identifier is
    /// the reserved [`SUMMARIES_KEY`].
    pub fn provider<P: InfoProvider>(self) -> Self {
        self.configure::<P>(None)
    }

    /// Appends a provider with arguments to the run sequence.
    ///
    /// # Panics
    ///
    /// Panics if a provider with the same identifier is already configured,
    /// or if the identifier is the reserved [`SUMMARIES_KEY`].
    pub fn provider_with_args<P: InfoProvider>(self, args: P::Args) -> Self {
        self.configure::<P>(Some(args))
    }

    /// Seeds a shared input value, resolvable by any provider in the run.
    pub fn shared_input<T: std::any::Any + Send + Sync>(mut self, value: T) -> Self {
        self.context.seed(value);
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Runner {
        Runner {
            providers: self.providers,
            context: self.context,
        }
    }

    fn configure<P: InfoProvider>(mut self, args: Option<P::Args>) -> Self {
        // A raw value under the reserved key would make the persisted record
        // emit the key twice and poison the whole history document.
        if P::IDENTIFIER == SUMMARIES_KEY {
            panic!("provider identifier `{}` is reserved", P::IDENTIFIER);
        }
        if !self.identifiers.insert(P::IDENTIFIER) {
            panic!("duplicate provider identifier `{}`", P::IDENTIFIER);
        }
        self.providers.push(ConfiguredProvider::new::<P>(args));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Context, Summary};
    use crate::error::{Result, TrendError};
    use crate::history::{HistoryStore, InMemoryHistory};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Steady(u64);

    impl InfoProvider for Steady {
        type Args = ();
        const IDENTIFIER: &'static str = "steady";

        fn extract(_context: &mut Context, _args: Option<&()>) -> Result<Self> {
            Ok(Steady(5))
        }

        fn summary(&self, previous: Option<&Self>, _args: Option<&()>) -> Summary {
            Summary::generic("steady", self.0, previous.map(|p| p.0), true, |v| {
                v.to_string()
            })
        }
    }

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Broken(u64);

    impl InfoProvider for Broken {
        type Args = ();
        const IDENTIFIER: &'static str = "broken";

        fn extract(_context: &mut Context, _args: Option<&()>) -> Result<Self> {
            Err(TrendError::extraction("build log not found"))
        }

        fn summary(&self, _previous: Option<&Self>, _args: Option<&()>) -> Summary {
            Summary::generic("broken", self.0, None, true, |v| v.to_string())
        }
    }

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct NeedsBroken(u64);

    impl InfoProvider for NeedsBroken {
        type Args = ();
        const IDENTIFIER: &'static str = "needs_broken";

        fn extract(context: &mut Context, _args: Option<&()>) -> Result<Self> {
            let broken = context.resolve::<Broken>()?;
            Ok(NeedsBroken(broken.0))
        }

        fn summary(&self, _previous: Option<&Self>, _args: Option<&()>) -> Summary {
            Summary::generic("needs_broken", self.0, None, true, |v| v.to_string())
        }
    }

    #[test]
    fn failed_provider_does_not_abort_siblings() {
        let mut history = InMemoryHistory::new();
        let result = Runner::builder()
            .provider::<Broken>()
            .provider::<Steady>()
            .build()
            .run(&mut history);

        let record = result.record();
        assert_eq!(record.raw_value("steady"), Some(&json!(5)));
        assert!(record.raw_value("broken").is_none());
        assert_eq!(record.summaries().len(), 1);
        assert_eq!(record.errors().len(), 1);
        assert!(record.errors()[0].starts_with("broken:"));
        assert!(record.errors()[0].contains("build log not found"));
    }

    #[test]
    fn dependent_of_failed_provider_reports_dependency_failure() {
        let mut history = InMemoryHistory::new();
        let result = Runner::builder()
            .provider::<Broken>()
            .provider::<NeedsBroken>()
            .provider::<Steady>()
            .build()
            .run(&mut history);

        let record = result.record();
        assert_eq!(record.errors().len(), 2);
        assert!(record.errors()[1].starts_with("needs_broken:"));
        assert!(record.errors()[1].contains("dependency failed"));
        assert_eq!(record.raw_value("steady"), Some(&json!(5)));
    }

    #[test]
    fn persistence_failure_keeps_the_record_available() {
        let mut history = InMemoryHistory::failing_appends();
        let result = Runner::builder()
            .provider::<Steady>()
            .build()
            .run(&mut history);

        assert!(!result.is_persisted());
        assert_eq!(result.record().raw_value("steady"), Some(&json!(5)));
        assert!(history.load().is_empty());
    }

    #[test]
    #[should_panic(expected = "duplicate provider identifier")]
    fn duplicate_identifiers_panic() {
        let _ = Runner::builder().provider::<Steady>().provider::<Steady>();
    }

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Colliding(u64);

    impl InfoProvider for Colliding {
        type Args = ();
        const IDENTIFIER: &'static str = SUMMARIES_KEY;

        fn extract(_context: &mut Context, _args: Option<&()>) -> Result<Self> {
            Ok(Colliding(7))
        }

        fn summary(&self, _previous: Option<&Self>, _args: Option<&()>) -> Summary {
            Summary::generic("colliding", self.0, None, true, |v| v.to_string())
        }
    }

    // A raw value stored under the summaries key would serialize the key
    // twice, and a record like that no longer deserializes on the next load.
    #[test]
    #[should_panic(expected = "reserved")]
    fn reserved_identifier_panics() {
        let _ = Runner::builder().provider::<Colliding>();
    }
}
