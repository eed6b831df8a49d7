//! Tree builders: lowering input sources into the tree model.
//!
//! Two builders are provided: a JSON interchange format, so any external
//! grammar-aware tool can hand over a prebuilt tree, and a tree-sitter
//! based builder for the compiled-in grammars. Both end their pipeline with
//! `remove_empty_nodes` and a boundary recalculation.

pub mod json;
#[cfg(feature = "sitter")]
pub mod sitter;
