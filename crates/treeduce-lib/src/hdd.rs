//! The breadth-first, level-oriented HDD driver.

use treeduce_core::{NodeId, State, Tree, info};

use crate::dd::DeltaDebugger;
use crate::phases::{PhaseConfig, ReduceContext};
use crate::TestId;

/// Live nodes whose depth in the live tree equals `level` (the root is
/// level 0). Removed subtrees are not descended into.
fn collect_level_nodes(tree: &Tree, level: usize) -> Vec<NodeId> {
    fn visit(tree: &Tree, id: NodeId, current: usize, level: usize, out: &mut Vec<NodeId>) {
        if tree[id].state != State::Keep {
            return;
        }
        if current == level {
            out.push(id);
        } else {
            for &child in tree[id].children() {
                visit(tree, child, current + 1, level, out);
            }
        }
    }

    // A list (not a set) for the sake of stability.
    let mut out = Vec::new();
    visit(tree, tree.root(), 0, level, &mut out);
    out
}

/// Run the hierarchical delta debugging reduce algorithm.
///
/// Every iteration collects each level of the live tree in turn and applies
/// the phase's transformations to it; with `hdd_star` the iterations repeat
/// until one of them changes nothing. The result is 1-tree-minimal when
/// `hdd_star` is on and no config filter is installed.
pub fn hddmin<D: DeltaDebugger>(
    tree: &mut Tree,
    ctx: &ReduceContext<'_, D>,
    id_prefix: &TestId,
    phase: &PhaseConfig,
    hdd_star: bool,
) {
    if collect_level_nodes(tree, 0).is_empty() {
        tracing::info!("Nothing to reduce.");
        return;
    }

    for iter_cnt in 0.. {
        tracing::info!("Iteration #{iter_cnt}");

        let mut changed = false;
        for level in 0.. {
            let mut level_nodes = collect_level_nodes(tree, level);
            if level_nodes.is_empty() {
                break;
            }

            if let Some(filter) = phase.config_filter {
                level_nodes.retain(|&node| filter(tree, node));
                if level_nodes.is_empty() {
                    continue;
                }
            }

            tracing::info!("Checking level {level} / {} ...", info::height(tree));

            for (trans_cnt, &transformation) in phase.transformations.iter().enumerate() {
                let id = id_prefix
                    .child(format!("i{iter_cnt}"))
                    .child(format!("l{level}"))
                    .child(format!("t{trans_cnt}"));
                changed |= transformation.apply(tree, &level_nodes, ctx, id);
            }
        }

        if !hdd_star || !changed {
            break;
        }
    }
}
