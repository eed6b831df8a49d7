//! Candidate builders: map reducer configurations to test case strings.
//!
//! Both builders render through an [`UnparseView`], so candidate
//! construction never mutates the tree; the driver only commits a result
//! after the reducer returns.

use std::collections::{HashMap, HashSet};

use treeduce_core::{NodeId, State, Tree, UnparseView};

use crate::TestBuilder;

/// Builder for pruning: nodes under reduction that are absent from the
/// configuration render as removed.
pub struct PruningTestBuilder<'t> {
    tree: &'t Tree,
    ids: HashSet<NodeId>,
    with_whitespace: bool,
}

impl<'t> PruningTestBuilder<'t> {
    /// `ids` are the nodes whose status the reducer may change; everything
    /// else renders as stored.
    pub fn new(
        tree: &'t Tree,
        ids: impl IntoIterator<Item = NodeId>,
        with_whitespace: bool,
    ) -> Self {
        Self {
            tree,
            ids: ids.into_iter().collect(),
            with_whitespace,
        }
    }
}

struct PruneView<'b> {
    ids: &'b HashSet<NodeId>,
    kept: HashSet<NodeId>,
}

impl UnparseView for PruneView<'_> {
    fn state(&self, tree: &Tree, id: NodeId) -> State {
        if self.ids.contains(&id) && !self.kept.contains(&id) {
            State::Removed
        } else {
            tree[id].state
        }
    }
}

impl TestBuilder<NodeId> for PruningTestBuilder<'_> {
    fn build(&self, config: &[NodeId]) -> String {
        let view = PruneView {
            ids: &self.ids,
            kept: config.iter().copied().collect(),
        };
        self.tree
            .unparse_with(self.tree.root(), self.with_whitespace, &view)
    }
}

/// Builder for hoisting: the configuration is a list of node → descendant
/// substitutions to apply while rendering.
pub struct HoistingTestBuilder<'t> {
    tree: &'t Tree,
    with_whitespace: bool,
}

impl<'t> HoistingTestBuilder<'t> {
    pub fn new(tree: &'t Tree, with_whitespace: bool) -> Self {
        Self {
            tree,
            with_whitespace,
        }
    }
}

struct HoistView {
    mapping: HashMap<NodeId, NodeId>,
}

impl UnparseView for HoistView {
    fn map(&self, _tree: &Tree, id: NodeId) -> NodeId {
        self.mapping.get(&id).copied().unwrap_or(id)
    }
}

impl TestBuilder<(NodeId, NodeId)> for HoistingTestBuilder<'_> {
    fn build(&self, config: &[(NodeId, NodeId)]) -> String {
        let view = HoistView {
            mapping: config.iter().copied().collect(),
        };
        self.tree
            .unparse_with(self.tree.root(), self.with_whitespace, &view)
    }
}
