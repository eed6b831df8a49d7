//! Configuration filters.

use treeduce_core::{NodeId, Tree};

/// Node predicate restricting a configuration before it reaches the
/// reducer.
pub type NodeFilter = fn(&Tree, NodeId) -> bool;

/// Keep only nodes whose replacement is the empty string.
///
/// Installed as the config filter this gives the coarse variant of
/// hierarchical delta debugging: a fast first pass that deletes whole
/// optional subtrees and skips everything whose removal would leave a
/// non-empty replacement behind.
pub fn coarse_filter(tree: &Tree, id: NodeId) -> bool {
    tree[id].replace.as_deref() == Some("")
}
