//! Hoisting: replace a node with one of its same-named descendants.

use indexmap::IndexMap;

use treeduce_core::{NodeId, State, Tree};

use crate::builders::HoistingTestBuilder;
use crate::dd::{ConfigTest, DeltaDebugger};
use crate::phases::ReduceContext;
use crate::{Outcome, TestId};

/// Try hoisting the configured subtrees.
///
/// A hoist substitutes a node with a same-named descendant, shrinking the
/// tree while keeping it well-formed with respect to the grammar. Returns
/// whether the tree changed.
pub fn hoist<D: DeltaDebugger>(
    tree: &mut Tree,
    config_nodes: &[NodeId],
    ctx: &ReduceContext<'_, D>,
    id_prefix: TestId,
) -> bool {
    if config_nodes.is_empty() {
        return false;
    }

    let mapping = {
        let builder = HoistingTestBuilder::new(&*tree, ctx.with_whitespace);
        let test = ConfigTest::new(&builder, ctx.oracle, ctx.cache, id_prefix);
        minimize_mapping(&*tree, config_nodes, &test)
    };

    let changed = !mapping.is_empty();
    if changed {
        let root = tree.root();
        let root = apply_mapping(tree, &mapping, root);
        tree.set_root(root);
    }

    if let Some(cache) = ctx.cache {
        cache.clear();
    }
    changed
}

/// Grow a node → descendant mapping until a full pass accepts nothing.
///
/// Proposals are tried in configuration order, descendants in pre-order;
/// the first accepted proposal wins and restarts the scan.
fn minimize_mapping(
    tree: &Tree,
    config: &[NodeId],
    test: &ConfigTest<'_, (NodeId, NodeId)>,
) -> IndexMap<NodeId, NodeId> {
    let mut mapping: IndexMap<NodeId, NodeId> = IndexMap::new();

    for run in 0.. {
        tracing::info!("Run #{run}");
        tracing::info!("\tMapping size: {}", mapping.len());

        let mut hoisted = false;
        let proposals: Vec<(NodeId, NodeId)> = config
            .iter()
            .flat_map(|&c| {
                let from = mapping.get(&c).copied().unwrap_or(c);
                collect_hoistables(tree, from)
                    .into_iter()
                    .map(move |m| (c, m))
            })
            .collect();

        for (i, (c, m)) in proposals.into_iter().enumerate() {
            let mut proposed = mapping.clone();
            proposed.insert(c, m);
            let mapping_config: Vec<(NodeId, NodeId)> =
                proposed.iter().map(|(&c, &m)| (c, m)).collect();
            let id = TestId::segment(format!("r{run}")).child(format!("m{i}"));

            if test.outcome(&mapping_config, &id) == Outcome::Fail {
                mapping = proposed;
                tracing::info!("\tHoisted");
                hoisted = true;
                break;
            }
        }

        if !hoisted {
            break;
        }
    }

    tracing::info!("\tDone");
    mapping
}

/// Same-named descendants of `node`, stopping at the first match on each
/// path; only live subtrees are searched.
fn collect_hoistables(tree: &Tree, node: NodeId) -> Vec<NodeId> {
    fn walk(tree: &Tree, name: &str, id: NodeId, out: &mut Vec<NodeId>) {
        if tree[id].name == name {
            out.push(id);
            return;
        }
        if tree[id].is_rule() && tree[id].state == State::Keep {
            for &child in tree[id].children() {
                walk(tree, name, child, out);
            }
        }
    }

    let mut out = Vec::new();
    let n = &tree[node];
    if n.is_rule() && n.state == State::Keep && !n.name.is_empty() {
        for &child in n.children() {
            walk(tree, &n.name, child, &mut out);
        }
    }
    out
}

/// Rewire the tree so every mapped node is replaced by its target,
/// recursively; returns the (possibly substituted) node for `id`.
fn apply_mapping(tree: &mut Tree, mapping: &IndexMap<NodeId, NodeId>, id: NodeId) -> NodeId {
    let id = mapping.get(&id).copied().unwrap_or(id);
    let children: Vec<NodeId> = tree[id].children().to_vec();
    for (i, child) in children.into_iter().enumerate() {
        let mapped = apply_mapping(tree, mapping, child);
        if mapped != child {
            tree.set_child(id, i, mapped);
        }
    }
    id
}
