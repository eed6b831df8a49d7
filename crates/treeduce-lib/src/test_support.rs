//! Shared fixtures and stub collaborators for engine tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use treeduce_core::{Node, NodeId, Position, Tree};

use crate::dd::{ConfigTest, DeltaDebugger};
use crate::{Cache, Outcome, TestId};

/// Greedy 1-minimal reducer: repeatedly drops single elements while the
/// oracle keeps failing. Slow but obviously correct, which is what a test
/// double should be.
pub struct GreedyDd {
    counter: AtomicUsize,
}

impl GreedyDd {
    pub fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }
}

impl DeltaDebugger for GreedyDd {
    fn ddmin(&self, config: Vec<NodeId>, test: &ConfigTest<'_, NodeId>) -> Vec<NodeId> {
        let mut current = config;
        loop {
            let mut shrunk = false;
            for i in 0..current.len() {
                let mut candidate = current.clone();
                candidate.remove(i);
                let attempt = self.counter.fetch_add(1, Ordering::Relaxed);
                let id = TestId::segment(format!("g{attempt}"));
                if test.outcome(&candidate, &id) == Outcome::Fail {
                    current = candidate;
                    shrunk = true;
                    break;
                }
            }
            if !shrunk {
                return current;
            }
        }
    }
}

/// In-memory content cache.
#[derive(Default)]
pub struct MemCache(Mutex<HashMap<String, Outcome>>);

impl Cache for MemCache {
    fn lookup(&self, candidate: &str) -> Option<Outcome> {
        self.0.lock().unwrap().get(candidate).copied()
    }

    fn store(&self, candidate: &str, outcome: Outcome) {
        self.0.lock().unwrap().insert(candidate.to_owned(), outcome);
    }

    fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Oracle failing whenever the candidate contains `needle`; every evaluated
/// candidate is recorded.
pub struct SubstringOracle {
    needle: &'static str,
    pub seen: Mutex<Vec<String>>,
}

impl SubstringOracle {
    pub fn new(needle: &'static str) -> Self {
        Self {
            needle,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn evaluations(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl crate::Oracle for SubstringOracle {
    fn test(&self, candidate: &str, _id: &TestId) -> Outcome {
        self.seen.lock().unwrap().push(candidate.to_owned());
        if candidate.contains(self.needle) {
            Outcome::Fail
        } else {
            Outcome::Pass
        }
    }
}

/// One-line token with `text` spanning `[column, column + len)`.
pub fn tok(tree: &mut Tree, name: &str, text: &str, column: u32) -> NodeId {
    let start = Position::new(1, column);
    tree.push(
        Node::token(name, text)
            .with_replace("")
            .with_span(start, start.after(text)),
    )
}

/// `start` rule over four word tokens: unparses to "a b c d".
pub fn flat_tree() -> (Tree, [NodeId; 4]) {
    let mut tree = Tree::new();
    let a = tok(&mut tree, "A", "a", 0);
    let b = tok(&mut tree, "B", "b", 2);
    let c = tok(&mut tree, "C", "c", 4);
    let d = tok(&mut tree, "D", "d", 6);
    let root = tree.push(Node::rule("start").with_replace(""));
    tree.add_children(root, [a, b, c, d]);
    tree.set_root(root);
    tree.calculate_boundaries();
    (tree, [a, b, c, d])
}

/// Two-level tree: `start` over two `item` rules with two tokens each;
/// unparses to "a b c d".
pub fn nested_tree() -> (Tree, [NodeId; 2]) {
    let mut tree = Tree::new();
    let a = tok(&mut tree, "A", "a", 0);
    let b = tok(&mut tree, "B", "b", 2);
    let c = tok(&mut tree, "C", "c", 4);
    let d = tok(&mut tree, "D", "d", 6);
    let left = tree.push(Node::rule("item").with_replace(""));
    tree.add_children(left, [a, b]);
    let right = tree.push(Node::rule("item").with_replace(""));
    tree.add_children(right, [c, d]);
    let root = tree.push(Node::rule("start").with_replace(""));
    tree.add_children(root, [left, right]);
    tree.set_root(root);
    tree.calculate_boundaries();
    (tree, [left, right])
}

/// Parenthesized expression nesting a same-named `expr`: "( x )".
pub fn hoistable_tree() -> (Tree, NodeId, NodeId) {
    let mut tree = Tree::new();
    let open = tok(&mut tree, "LPAREN", "(", 0);
    let x = tok(&mut tree, "ID", "x", 2);
    let close = tok(&mut tree, "RPAREN", ")", 4);
    let inner = tree.push(Node::rule("expr").with_replace("x"));
    tree.add_child(inner, x);
    let outer = tree.push(Node::rule("expr").with_replace("x"));
    tree.add_children(outer, [open, inner, close]);
    tree.set_root(outer);
    tree.calculate_boundaries();
    (tree, outer, inner)
}
