use std::sync::atomic::{AtomicUsize, Ordering};

use treeduce_core::{Node, NodeId, Position, Tree};
use treeduce_lib::{ConfigTest, DeltaDebugger, FnOracle, Outcome, PruningTestBuilder, TestId};

use crate::dd::DdMin;

/// Flat list of word tokens, one space apart.
fn token_list(texts: &[&str]) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new();
    let mut column = 0u32;
    let mut ids = Vec::new();
    for text in texts {
        let start = Position::new(1, column);
        let end = start.after(text);
        column = end.column + 1;
        ids.push(tree.push(Node::token("WORD", *text).with_replace("").with_span(start, end)));
    }
    let root = tree.push(Node::rule("list").with_replace(""));
    tree.add_children(root, ids.clone());
    tree.set_root(root);
    (tree, ids)
}

fn minimize(
    texts: &[&str],
    interesting: impl Fn(&str) -> bool + Sync,
) -> (Vec<usize>, usize) {
    let (tree, ids) = token_list(texts);
    let builder = PruningTestBuilder::new(&tree, ids.iter().copied(), true);
    let evaluations = AtomicUsize::new(0);
    let oracle = FnOracle::new(|candidate: &str| {
        evaluations.fetch_add(1, Ordering::Relaxed);
        if interesting(candidate) {
            Outcome::Fail
        } else {
            Outcome::Pass
        }
    });
    let test = ConfigTest::new(&builder, &oracle, None, TestId::new());

    let result = DdMin::new().ddmin(ids.clone(), &test);
    let indices = result
        .into_iter()
        .map(|id| ids.iter().position(|&i| i == id).unwrap())
        .collect();
    (indices, evaluations.load(Ordering::Relaxed))
}

#[test]
fn finds_the_unique_minimal_pair() {
    let texts = ["t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7"];
    let (kept, _) = minimize(&texts, |candidate| {
        candidate.contains("t1") && candidate.contains("t5")
    });
    // 1-minimality has a unique answer here.
    assert_eq!(kept, vec![1, 5]);
}

#[test]
fn keeps_everything_when_nothing_is_removable() {
    let texts = ["x0", "x1", "x2"];
    let (kept, _) = minimize(&texts, |candidate| candidate == "x0 x1 x2");
    assert_eq!(kept, vec![0, 1, 2]);
}

#[test]
fn reduces_to_a_single_element() {
    let texts = ["a", "b", "c", "d", "e"];
    let (kept, _) = minimize(&texts, |candidate| candidate.contains('c'));
    assert_eq!(kept, vec![2]);
}

#[test]
fn short_configurations_are_returned_untested() {
    let (_, evaluations) = minimize(&["solo"], |candidate| candidate.contains("solo"));
    assert_eq!(evaluations, 0);
}

#[test]
fn is_deterministic() {
    let texts = ["t0", "t1", "t2", "t3", "t4", "t5"];
    let check = |candidate: &str| candidate.contains("t2") || candidate.contains("t4");
    let (first, first_evals) = minimize(&texts, check);
    let (second, second_evals) = minimize(&texts, check);
    assert_eq!(first, second);
    assert_eq!(first_evals, second_evals);
}

#[test]
fn result_is_one_minimal() {
    let texts = ["t0", "t1", "t2", "t3", "t4", "t5", "t6"];
    let check = |candidate: &str| {
        // Interesting iff at least two of t1, t3, t6 survive.
        ["t1", "t3", "t6"]
            .iter()
            .filter(|needle| candidate.contains(**needle))
            .count()
            >= 2
    };
    let (kept, _) = minimize(&texts, check);

    // Dropping any single kept element must lose the property.
    assert_eq!(kept.len(), 2);
    for skip in 0..kept.len() {
        let rendered: Vec<&str> = kept
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &idx)| texts[idx])
            .collect();
        assert!(!check(&rendered.join(" ")));
    }
}
