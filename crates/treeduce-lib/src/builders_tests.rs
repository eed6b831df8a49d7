use crate::TestBuilder;
use crate::builders::{HoistingTestBuilder, PruningTestBuilder};
use crate::test_support::{flat_tree, hoistable_tree};

use treeduce_core::State;

#[test]
fn pruning_builder_renders_subsets() {
    let (tree, [a, b, c, d]) = flat_tree();
    let builder = PruningTestBuilder::new(&tree, [a, b, c, d], true);

    assert_eq!(builder.build(&[a, b, c, d]), "a b c d");
    assert_eq!(builder.build(&[a, d]), "a d");
    assert_eq!(builder.build(&[b]), "b");
    assert_eq!(builder.build(&[]), "");
}

#[test]
fn pruning_builder_leaves_unconfigured_nodes_alone() {
    let (tree, [a, b, ..]) = flat_tree();
    // Only a and b may change status; c and d always render.
    let builder = PruningTestBuilder::new(&tree, [a, b], true);
    assert_eq!(builder.build(&[]), "c d");
    assert_eq!(builder.build(&[b]), "b c d");
}

#[test]
fn pruning_builder_does_not_mutate_the_tree() {
    let (tree, ids) = flat_tree();
    let builder = PruningTestBuilder::new(&tree, ids, true);
    builder.build(&[]);
    for id in ids {
        assert_eq!(tree[id].state, State::Keep);
    }
    assert_eq!(tree.unparse(true), "a b c d");
}

#[test]
fn hoisting_builder_substitutes_mapped_nodes() {
    let (tree, outer, inner) = hoistable_tree();
    let builder = HoistingTestBuilder::new(&tree, true);

    assert_eq!(builder.build(&[]), "( x )");
    assert_eq!(builder.build(&[(outer, inner)]), "x");
    // Still untouched afterwards.
    assert_eq!(tree.unparse(true), "( x )");
}
