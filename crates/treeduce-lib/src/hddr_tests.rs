use crate::hddr::hddrmin;
use crate::phases::{HddrOrder, PhaseConfig, ReduceContext};
use crate::test_support::{GreedyDd, SubstringOracle, nested_tree};
use crate::TestId;

use treeduce_core::State;

fn run_with_order(order: HddrOrder) -> (treeduce_core::Tree, usize) {
    let (mut tree, _) = nested_tree();
    let dd = GreedyDd::new();
    let oracle = SubstringOracle::new("c");
    let ctx = ReduceContext {
        dd: &dd,
        oracle: &oracle,
        cache: None,
        with_whitespace: true,
    };
    let (pop_first, append_reversed) = order.bits();
    hddrmin(
        &mut tree,
        &ctx,
        &TestId::segment("p0"),
        &PhaseConfig::default(),
        true,
        pop_first,
        append_reversed,
    );
    (tree, oracle.evaluations())
}

#[test]
fn hddrmin_reduces_in_every_traversal_order() {
    for order in [
        HddrOrder::Bfs,
        HddrOrder::BfsReverse,
        HddrOrder::Dfs,
        HddrOrder::DfsReverse,
    ] {
        let (tree, evaluations) = run_with_order(order);
        assert_eq!(tree.unparse(true), "c", "order {order:?}");
        assert!(evaluations > 0, "order {order:?}");
    }
}

#[test]
fn hddrmin_leaves_removed_subtrees_alone() {
    let (mut tree, [left, right]) = nested_tree();
    tree[right].state = State::Removed;

    let dd = GreedyDd::new();
    // Everything passes: the only interesting rendering is the current one.
    let oracle = SubstringOracle::new("a b");
    let ctx = ReduceContext {
        dd: &dd,
        oracle: &oracle,
        cache: None,
        with_whitespace: true,
    };
    hddrmin(
        &mut tree,
        &ctx,
        &TestId::segment("p0"),
        &PhaseConfig::default(),
        true,
        false,
        false,
    );

    // The dead subtree was neither revived nor visited.
    assert_eq!(tree[right].state, State::Removed);
    assert_eq!(tree[left].state, State::Keep);
    assert_eq!(tree.unparse(true), "a b");
}
