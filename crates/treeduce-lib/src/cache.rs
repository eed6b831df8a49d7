//! Outcome cache shared across candidate evaluations.

use crate::Outcome;

/// Cache of oracle outcomes, keyed by candidate text.
///
/// The test harness renders the candidate before consulting the cache, so
/// entries stay valid while node identities shift within one reduction
/// step. Every reduction operator calls `clear` when it completes, because
/// node states change between operators.
///
/// Implementations must tolerate concurrent reducer workers.
pub trait Cache: Sync {
    fn lookup(&self, candidate: &str) -> Option<Outcome>;
    fn store(&self, candidate: &str, outcome: Outcome);
    fn clear(&self);
}
