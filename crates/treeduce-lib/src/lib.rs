//! Hierarchical delta debugging engine.
//!
//! Given a syntax tree of a failing input and an oracle that classifies a
//! candidate as *interesting* or not, the engine produces a small variant
//! of the input that the oracle still finds interesting, by pruning and
//! hoisting syntactic subtrees.
//!
//! The tree model lives in `treeduce-core`; this crate holds everything
//! that acts on it: the tree transformations preparing a freshly built
//! tree, the candidate builders, the `prune`/`hoist` operators, the
//! level-oriented and recursive drivers, and the builders lowering input
//! sources into trees. The minimizing delta debugger itself, the oracle
//! and the outcome cache are consumed through traits.
//!
//! # Example
//!
//! ```
//! use treeduce_core::{Node, NodeId, Tree};
//! use treeduce_lib::{
//!     ConfigTest, DeltaDebugger, FnOracle, Outcome, ReduceOptions, TestId, reduce,
//! };
//!
//! // A naive stand-in for a real minimizer: drop one element at a time.
//! struct OneByOne;
//!
//! impl DeltaDebugger for OneByOne {
//!     fn ddmin(&self, config: Vec<NodeId>, test: &ConfigTest<'_, NodeId>) -> Vec<NodeId> {
//!         let mut current = config;
//!         loop {
//!             let dropped = (0..current.len()).find(|&i| {
//!                 let mut candidate = current.clone();
//!                 candidate.remove(i);
//!                 test.outcome(&candidate, &TestId::segment(format!("d{i}"))) == Outcome::Fail
//!             });
//!             match dropped {
//!                 Some(i) => {
//!                     current.remove(i);
//!                 }
//!                 None => return current,
//!             }
//!         }
//!     }
//! }
//!
//! let mut tree = Tree::new();
//! let a = tree.push(Node::token("A", "a").with_replace(""));
//! let b = tree.push(Node::token("B", "b").with_replace(""));
//! let root = tree.push(Node::rule("start").with_replace(""));
//! tree.add_children(root, [a, b]);
//! tree.set_root(root);
//!
//! let oracle = FnOracle::new(|candidate: &str| {
//!     if candidate.contains('b') { Outcome::Fail } else { Outcome::Pass }
//! });
//! reduce(&mut tree, &OneByOne, &oracle, None, &ReduceOptions::default());
//! assert_eq!(tree.unparse(true), "b");
//! ```

pub mod build;
pub mod builders;
pub mod filter;
pub mod hdd;
pub mod hddr;
pub mod hoist;
pub mod phases;
pub mod prune;
pub mod transform;

mod cache;
mod dd;
mod oracle;

#[cfg(test)]
mod builders_tests;
#[cfg(test)]
mod dd_tests;
#[cfg(test)]
mod hddr_tests;
#[cfg(test)]
mod test_support;

pub use builders::{HoistingTestBuilder, PruningTestBuilder};
pub use cache::Cache;
pub use dd::{ConfigTest, DeltaDebugger, EmptyDd, TestBuilder};
pub use filter::{NodeFilter, coarse_filter};
pub use oracle::{FnOracle, Oracle, Outcome, TestId};
pub use phases::{
    HddVariant, HddrOrder, PhaseConfig, PhasePreset, ReduceContext, ReduceOptions, Transformation,
    reduce,
};

/// Errors that can occur while building a tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The grammar could not produce a parse tree for the input.
    #[error("failed to parse input source")]
    ParseFailed,

    /// The interchange document does not describe a well-formed tree.
    #[error("invalid tree description: {0}")]
    InvalidTree(String),

    /// The interchange document is not valid JSON.
    #[error("malformed tree document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, Error>;
