//! Per-run typed context cache for sharing values between providers.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, TrendError};

type SharedValue = Arc<dyn Any + Send + Sync>;
type Producer = Box<dyn FnOnce(&mut Context) -> Result<SharedValue>>;

/// Cached outcome for one value type. Once set (success or failure) the
/// entry is immutable for the remainder of the run.
enum Entry {
    /// The producer for this type is currently running. Seeing this state
    /// during resolution means the dependency graph has a cycle.
    Pending,
    Ready(SharedValue),
    Failed(String),
}

/// A memoizing, type-keyed store that lets providers request values produced
/// by other providers (or seeded shared inputs) without re-computing them.
///
/// Providers declare needs by type, not by explicit ordering: the runner
/// registers a producer for every configured provider before the run starts,
/// so resolution is lazy and order-tolerant. A type that was neither seeded
/// nor configured resolves to [`TrendError::DependencyFailed`].
///
/// The context is created fresh for every run and discarded afterwards; it
/// carries no state across runs.
///
/// # Example
///
/// ```rust
/// use buildtrend::core::Context;
///
/// #[derive(Debug, PartialEq)]
/// struct Threshold(u64);
///
/// let mut context = Context::new();
/// context.seed(Threshold(10));
///
/// let threshold = context.resolve::<Threshold>().unwrap();
/// assert_eq!(*threshold, Threshold(10));
/// ```
#[derive(Default)]
pub struct Context {
    entries: HashMap<TypeId, Entry>,
    producers: HashMap<TypeId, Producer>,
}

impl Context {
    /// Creates a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a shared input value, making it resolvable by any provider in
    /// this run. Seeding the same type twice replaces the earlier value.
    pub fn seed<T: Any + Send + Sync>(&mut self, value: T) {
        debug!(input = type_name::<T>(), "seeding shared input");
        self.entries
            .insert(TypeId::of::<T>(), Entry::Ready(Arc::new(value)));
    }

    /// Installs the producer for a configured provider's output type.
    ///
    /// The producer runs at most once per run, on first resolution.
    pub(crate) fn register_producer<T, F>(&mut self, produce: F)
    where
        T: Any + Send + Sync,
        F: FnOnce(&mut Context) -> Result<T> + 'static,
    {
        self.producers.insert(
            TypeId::of::<T>(),
            Box::new(move |context| produce(context).map(|value| Arc::new(value) as SharedValue)),
        );
    }

    /// Resolves a dependency, producing it on first request.
    ///
    /// Intended for providers that consume another provider's output or a
    /// seeded shared input. Every failure mode surfaces as
    /// [`TrendError::DependencyFailed`]: the producer failed (now or
    /// earlier in the run), the type was never configured or seeded, or the
    /// dependency graph has a cycle.
    pub fn resolve<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
        self.produce::<T>().map_err(|err| match err {
            TrendError::DependencyFailed(_) => err,
            other => TrendError::dependency_failed(format!(
                "required value `{}` is unavailable: {other}",
                type_name::<T>()
            )),
        })
    }

    /// Produces a value for the runner's own per-provider step.
    ///
    /// Unlike [`resolve`](Self::resolve), a fresh production failure is
    /// returned as the provider's original error so the run record carries
    /// the extraction message rather than a dependency wrapper.
    pub(crate) fn produce<T: Any + Send + Sync>(&mut self) -> Result<Arc<T>> {
        let key = TypeId::of::<T>();
        match self.entries.get(&key) {
            Some(Entry::Ready(value)) => return downcast::<T>(value.clone()),
            Some(Entry::Failed(message)) => return Err(TrendError::extraction(message.clone())),
            Some(Entry::Pending) => {
                return Err(TrendError::dependency_failed(format!(
                    "cyclic dependency while producing `{}`",
                    type_name::<T>()
                )))
            }
            None => {}
        }

        let Some(producer) = self.producers.remove(&key) else {
            return Err(TrendError::dependency_failed(format!(
                "`{}` was not seeded and no configured provider produces it",
                type_name::<T>()
            )));
        };

        self.entries.insert(key, Entry::Pending);
        match producer(self) {
            Ok(value) => {
                debug!(value = type_name::<T>(), "produced context value");
                self.entries.insert(key, Entry::Ready(value.clone()));
                downcast::<T>(value)
            }
            Err(err) => {
                self.entries
                    .insert(key, Entry::Failed(err.message().to_string()));
                Err(err)
            }
        }
    }
}

fn downcast<T: Any + Send + Sync>(value: SharedValue) -> Result<Arc<T>> {
    value.downcast::<T>().map_err(|_| {
        TrendError::dependency_failed(format!(
            "cached value for `{}` has an unexpected type",
            type_name::<T>()
        ))
    })
}
