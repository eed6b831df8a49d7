//! Core data structures for treeduce HDD trees.
//!
//! Two layers:
//! - **Tree model**: an arena of rule/token nodes with positions, states and
//!   replacement strings ([`Tree`], [`Node`], [`NodeId`])
//! - **Unparsing**: deterministic rendering of the live tree back to text,
//!   with per-call overrides for candidate construction ([`UnparseView`])
//!
//! Tree construction is left to builders in downstream crates; this crate
//! has no I/O.

pub mod info;

mod position;
mod tree;

#[cfg(test)]
mod info_tests;

pub use position::Position;
pub use tree::{Node, NodeId, NodeKind, NoopView, RuleKind, State, TokenClass, Tree, UnparseView};
