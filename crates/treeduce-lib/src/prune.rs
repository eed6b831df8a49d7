//! Pruning: delete a subset of configured subtrees.

use std::collections::HashSet;

use treeduce_core::{NodeId, State, Tree};

use crate::builders::PruningTestBuilder;
use crate::dd::{ConfigTest, DeltaDebugger, EmptyDd};
use crate::phases::ReduceContext;
use crate::TestId;

/// Pruning-based reduction of a set of nodes (sub-trees).
///
/// Hands the configured node ids to the reducer, consults the empty-set
/// reducer when the result bottoms out at one element, then marks every
/// configured node kept or removed. Returns whether the tree changed.
pub fn prune<D: DeltaDebugger>(
    tree: &mut Tree,
    config_nodes: &[NodeId],
    ctx: &ReduceContext<'_, D>,
    id_prefix: TestId,
) -> bool {
    let config_ids: Vec<NodeId> = config_nodes.to_vec();

    let kept = {
        let builder =
            PruningTestBuilder::new(&*tree, config_ids.iter().copied(), ctx.with_whitespace);
        let test = ConfigTest::new(&builder, ctx.oracle, ctx.cache, id_prefix);
        let mut kept = ctx.dd.ddmin(config_ids.clone(), &test);
        if kept.len() == 1 {
            kept = EmptyDd.ddmin(kept, &test);
        }
        kept
    };

    let config_set: HashSet<NodeId> = config_ids.iter().copied().collect();
    let kept: HashSet<NodeId> = kept.into_iter().collect();
    assert!(
        kept.is_subset(&config_set),
        "reducer returned nodes outside the configuration"
    );

    let root = tree.root();
    set_states(tree, root, &config_set, &kept);

    if let Some(cache) = ctx.cache {
        cache.clear();
    }
    kept.len() < config_set.len()
}

/// Commit the reducer's verdict: configured nodes become kept or removed,
/// the rest of the live tree is left alone.
fn set_states(tree: &mut Tree, id: NodeId, config: &HashSet<NodeId>, kept: &HashSet<NodeId>) {
    if config.contains(&id) {
        tree[id].state = if kept.contains(&id) {
            State::Keep
        } else {
            State::Removed
        };
    } else if tree[id].is_rule() && tree[id].state == State::Keep {
        for child in tree[id].children().to_vec() {
            set_states(tree, child, config, kept);
        }
    }
}
