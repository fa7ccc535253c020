//! The provider protocol: the contract every metric type implements.

use std::any::Any;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::{Context, RunRecord, Summary};
use crate::error::Result;

/// A pluggable metric type that extracts a current value and compares it to
/// the previously recorded one.
///
/// Implementations are created once per run by [`extract`](Self::extract),
/// never mutated afterwards, and must be able to rebuild a comparable
/// instance from their own serialized form (`Serialize + DeserializeOwned`):
/// that serialized form is what the history stores under
/// [`IDENTIFIER`](Self::IDENTIFIER) and hands back as the previous value on
/// the next run.
///
/// # Example
///
/// ```rust
/// use buildtrend::core::{Context, InfoProvider, Summary};
/// use buildtrend::error::Result;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// #[serde(transparent)]
/// struct TodoCount(u64);
///
/// impl InfoProvider for TodoCount {
///     type Args = ();
///     const IDENTIFIER: &'static str = "todo_count";
///
///     fn extract(_context: &mut Context, _args: Option<&()>) -> Result<Self> {
///         Ok(TodoCount(3))
///     }
///
///     fn summary(&self, previous: Option<&Self>, _args: Option<&()>) -> Summary {
///         Summary::generic("TODO markers", self.0, previous.map(|p| p.0), true, |v| {
///             v.to_string()
///         })
///     }
/// }
/// ```
pub trait InfoProvider: Any + Send + Sync + Serialize + DeserializeOwned + Sized {
    /// Optional per-provider configuration supplied by the caller. Its shape
    /// is provider-specific and opaque to the engine.
    type Args: Send + Sync + 'static;

    /// Stable, unique key for this metric. Used as the map key inside a
    /// run record's raw values and as the lookup key into history.
    const IDENTIFIER: &'static str;

    /// Computes the current value.
    ///
    /// May resolve other providers' outputs or seeded shared inputs through
    /// the context, and may perform I/O. The engine guarantees at most one
    /// invocation per provider per run, no matter how many other providers
    /// depend on the result.
    fn extract(context: &mut Context, args: Option<&Self::Args>) -> Result<Self>;

    /// Compares this instance with the previous recording and produces a
    /// summary. Must be pure: no I/O, identical inputs give identical
    /// output. With no previous instance the summary reports only the
    /// current value.
    fn summary(&self, previous: Option<&Self>, args: Option<&Self::Args>) -> Summary;
}

/// A configured provider with its type and arguments erased, so the runner
/// can drive a heterogeneous sequence of them.
///
/// `register` installs the provider's producer into the context before the
/// run; `execute` performs its slot of the run loop: produce the instance,
/// record the raw value, diff against the previous run, and render the
/// summary, or record the error string and move on.
pub(crate) struct ConfiguredProvider {
    pub(crate) identifier: &'static str,
    pub(crate) register: Box<dyn FnOnce(&mut Context)>,
    pub(crate) execute: Box<dyn FnOnce(&mut Context, Option<&RunRecord>, &mut RunRecord)>,
}

impl ConfiguredProvider {
    pub(crate) fn new<P: InfoProvider>(args: Option<P::Args>) -> Self {
        let args = Arc::new(args);
        let producer_args = Arc::clone(&args);

        let register = Box::new(move |context: &mut Context| {
            context.register_producer::<P, _>(move |ctx| {
                debug!(provider = P::IDENTIFIER, "extracting");
                P::extract(ctx, producer_args.as_ref().as_ref())
            });
        });

        let execute = Box::new(
            move |context: &mut Context, previous_run: Option<&RunRecord>, record: &mut RunRecord| {
                let instance = match context.produce::<P>() {
                    Ok(instance) => instance,
                    Err(err) => {
                        record.push_error(format!("{}: {err}", P::IDENTIFIER));
                        return;
                    }
                };

                let raw = match serde_json::to_value(instance.as_ref()) {
                    Ok(raw) => raw,
                    Err(err) => {
                        record.push_error(format!(
                            "{}: extracted value does not serialize: {err}",
                            P::IDENTIFIER
                        ));
                        return;
                    }
                };
                record.insert_raw(P::IDENTIFIER, raw);

                let previous = previous_run
                    .and_then(|run| run.raw_value(P::IDENTIFIER))
                    .and_then(|value| match serde_json::from_value::<P>(value.clone()) {
                        Ok(previous) => Some(previous),
                        Err(err) => {
                            warn!(
                                provider = P::IDENTIFIER,
                                error = %err,
                                "previous value does not deserialize, treating as absent"
                            );
                            None
                        }
                    });

                let summary = instance.summary(previous.as_ref(), args.as_ref().as_ref());
                record.push_summary(summary.to_string());
            },
        );

        Self {
            identifier: P::IDENTIFIER,
            register,
            execute,
        }
    }
}
