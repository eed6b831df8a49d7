//! Contracts between the reduction operators and the external minimizer.

use treeduce_core::NodeId;

use crate::{Cache, Oracle, Outcome, TestId};

/// Builds a candidate string from a configuration without touching the
/// tree, so a parallel reducer can render candidates from several workers
/// at once.
pub trait TestBuilder<I>: Sync {
    fn build(&self, config: &[I]) -> String;
}

/// Per-operator test harness handed to the reducer.
///
/// Renders the candidate for a configuration, consults the cache by
/// candidate content, then asks the oracle. The id passed by the reducer is
/// relative; the harness prepends the operator's prefix.
pub struct ConfigTest<'r, I> {
    builder: &'r dyn TestBuilder<I>,
    oracle: &'r dyn Oracle,
    cache: Option<&'r dyn Cache>,
    id_prefix: TestId,
}

impl<'r, I> ConfigTest<'r, I> {
    pub fn new(
        builder: &'r dyn TestBuilder<I>,
        oracle: &'r dyn Oracle,
        cache: Option<&'r dyn Cache>,
        id_prefix: TestId,
    ) -> Self {
        Self {
            builder,
            oracle,
            cache,
            id_prefix,
        }
    }

    pub fn id_prefix(&self) -> &TestId {
        &self.id_prefix
    }

    pub fn outcome(&self, config: &[I], id: &TestId) -> Outcome {
        let candidate = self.builder.build(config);
        if let Some(cache) = self.cache
            && let Some(outcome) = cache.lookup(&candidate)
        {
            tracing::debug!("Cache hit for {id}: {outcome:?}");
            return outcome;
        }
        let outcome = self.oracle.test(&candidate, &self.id_prefix.join(id));
        if let Some(cache) = self.cache {
            cache.store(&candidate, outcome);
        }
        outcome
    }
}

/// External minimizing delta debugger.
///
/// `ddmin` must return a failing subset of `config` that is 1-minimal,
/// keeps the relative order of its elements, and is deterministic for a
/// given configuration and test harness. How it splits, parallelizes or
/// caches is its own business.
pub trait DeltaDebugger {
    fn ddmin(&self, config: Vec<NodeId>, test: &ConfigTest<'_, NodeId>) -> Vec<NodeId>;
}

/// Reducer variant that tests exactly the empty configuration.
///
/// Minimizers based on bisection never try the empty set; when a
/// minimization bottoms out at one element, this decides whether even that
/// element can go.
pub struct EmptyDd;

impl EmptyDd {
    /// `config` must have exactly one element; the result is either `config`
    /// or the empty configuration.
    pub fn ddmin(&self, config: Vec<NodeId>, test: &ConfigTest<'_, NodeId>) -> Vec<NodeId> {
        assert_eq!(config.len(), 1);

        tracing::info!("Run: trying 0.");
        if test.outcome(&[], &TestId::segment("empty")) == Outcome::Fail {
            tracing::info!("Reduced to 0 units.");
            return Vec::new();
        }
        config
    }
}
