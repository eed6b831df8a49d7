//! Read-only tree statistics, for logging.

use indexmap::IndexMap;

use crate::{NodeId, State, Tree};

/// Count live nodes by concrete variant name.
///
/// Removed nodes and their subtrees are not counted; the tree is not
/// modified.
pub fn count(tree: &Tree) -> IndexMap<&'static str, usize> {
    fn visit(tree: &Tree, id: NodeId, stats: &mut IndexMap<&'static str, usize>) {
        if tree[id].state != State::Keep {
            return;
        }
        *stats.entry(tree[id].kind_name()).or_insert(0) += 1;
        for &child in tree[id].children() {
            visit(tree, child, stats);
        }
    }

    let mut stats = IndexMap::new();
    if !tree.is_empty() {
        visit(tree, tree.root(), &mut stats);
    }
    stats.sort_unstable_keys();
    stats
}

/// Height of the live tree (0 if the root is removed).
pub fn height(tree: &Tree) -> usize {
    fn visit(tree: &Tree, id: NodeId) -> usize {
        if tree[id].state != State::Keep {
            return 0;
        }
        1 + tree[id]
            .children()
            .iter()
            .map(|&child| visit(tree, child))
            .max()
            .unwrap_or(0)
    }

    if tree.is_empty() { 0 } else { visit(tree, tree.root()) }
}

/// Number of live nodes on each tree level.
pub fn shape(tree: &Tree) -> Vec<usize> {
    fn visit(tree: &Tree, id: NodeId, level: usize, sizes: &mut Vec<usize>) {
        if tree[id].state != State::Keep {
            return;
        }
        if sizes.len() <= level {
            sizes.resize(level + 1, 0);
        }
        sizes[level] += 1;
        for &child in tree[id].children() {
            visit(tree, child, level + 1, sizes);
        }
    }

    let mut sizes = Vec::new();
    if !tree.is_empty() {
        visit(tree, tree.root(), 0, &mut sizes);
    }
    sizes
}
