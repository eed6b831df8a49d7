//! The recursive HDD driver (HDDr), reformulated over an explicit queue.
//!
//! How nodes are popped (front or back) and how children are appended
//! (forward or reversed) give rise to the traversal variants:
//!
//! - pop first + forward append: breadth-first,
//! - pop first + reverse append: syntactically reversed breadth-first,
//! - pop last + reverse append: depth-first,
//! - pop last + forward append: syntactically reversed depth-first.

use std::collections::VecDeque;

use treeduce_core::{State, Tree};

use crate::dd::DeltaDebugger;
use crate::phases::{PhaseConfig, ReduceContext};
use crate::TestId;

/// Run the recursive variant of the hierarchical delta debugging reduce
/// algorithm: at every visited rule the configuration is the set of its
/// live children.
pub fn hddrmin<D: DeltaDebugger>(
    tree: &mut Tree,
    ctx: &ReduceContext<'_, D>,
    id_prefix: &TestId,
    phase: &PhaseConfig,
    hdd_star: bool,
    pop_first: bool,
    append_reversed: bool,
) {
    for iter_cnt in 0.. {
        tracing::info!("Iteration #{iter_cnt}");

        let mut changed = false;
        let mut queue = VecDeque::from([tree.root()]);
        let mut node_cnt = 0usize;

        loop {
            let node = if pop_first {
                queue.pop_front()
            } else {
                queue.pop_back()
            };
            let Some(node) = node else { break };
            let cnt = node_cnt;
            node_cnt += 1;

            if !tree[node].is_rule() || tree[node].state != State::Keep {
                continue;
            }

            let mut children: Vec<_> = tree[node]
                .children()
                .iter()
                .copied()
                .filter(|&child| tree[child].state == State::Keep)
                .collect();
            if let Some(filter) = phase.config_filter {
                children.retain(|&child| filter(tree, child));
            }

            if !children.is_empty() {
                tracing::info!("Checking node #{cnt} ...");

                for (trans_cnt, &transformation) in phase.transformations.iter().enumerate() {
                    let id = id_prefix
                        .child(format!("i{iter_cnt}"))
                        .child(format!("n{cnt}"))
                        .child(format!("t{trans_cnt}"));
                    changed |= transformation.apply(tree, &children, ctx, id);
                }
            }

            // Enqueue whatever survived, in the requested order.
            let live: Vec<_> = tree[node]
                .children()
                .iter()
                .copied()
                .filter(|&child| tree[child].state == State::Keep)
                .collect();
            if append_reversed {
                queue.extend(live.into_iter().rev());
            } else {
                queue.extend(live);
            }
        }

        if !hdd_star || !changed {
            break;
        }
    }
}
