//! Tree transformations that prepare a freshly built tree for reduction.
//!
//! All of them mutate the tree in place. When several are requested they
//! are meant to run in the order: recursion flattening, squeezing,
//! skip-unremovable, skip-whitespace.

use treeduce_core::{Node, NodeId, State, Tree};

/// Delete nodes that never contribute to the output: tokens with empty text
/// (typically EOF) and rules left without children (lambda productions).
///
/// Run once by the builder pipelines.
pub fn remove_empty_nodes(tree: &mut Tree) {
    fn visit(tree: &mut Tree, id: NodeId) {
        if !tree[id].is_rule() {
            return;
        }
        let mut non_empty = Vec::new();
        for child in tree.clear_children(id) {
            if tree[child].is_rule() {
                visit(tree, child);
                if !tree[child].children().is_empty() {
                    non_empty.push(child);
                }
            } else if tree[child].text() != Some("") {
                non_empty.push(child);
            }
        }
        tree.add_children(id, non_empty);
    }

    let root = tree.root();
    visit(tree, root);
}

/// Flatten left/right-recursive structures.
///
/// A tree built with `rule : a | rule b` is rewritten as if the grammar had
/// been `rule : a b*`, which lets pruning remove the whole recurring block
/// instead of substituting each recursion step with its replacement.
pub fn flatten_recursion(tree: &mut Tree) {
    fn visit(tree: &mut Tree, id: NodeId) {
        if !tree[id].is_rule() || tree[id].state != State::Keep {
            return;
        }
        for child in tree[id].children().to_vec() {
            visit(tree, child);
        }

        let name = tree[id].name.clone();
        if name.is_empty() {
            return;
        }

        let children = tree[id].children().to_vec();
        if children.len() > 1 {
            let first = children[0];
            let last = *children.last().unwrap();
            if tree[first].is_rule() && tree[first].name == name {
                // Left recursion: lift the head, wrap the rest.
                let mut rest = Node::rule("").with_replace("");
                rest.start = tree[children[1]].start;
                rest.end = tree[last].end;
                let rest = tree.push(rest);
                tree.add_children(rest, children[1..].iter().copied());

                tree.clear_children(id);
                let lifted = tree[first].children().to_vec();
                tree.add_children(id, lifted);
                tree.add_child(id, rest);
            } else if tree[last].is_rule() && tree[last].name == name {
                // Right recursion, symmetric.
                let mut rest = Node::rule("").with_replace("");
                rest.start = tree[first].start;
                rest.end = tree[children[children.len() - 2]].end;
                let rest = tree.push(rest);
                tree.add_children(rest, children[..children.len() - 1].iter().copied());

                tree.clear_children(id);
                tree.add_child(id, rest);
                let lifted = tree[last].children().to_vec();
                tree.add_children(id, lifted);
            }
        }

        // A 1-step chain of the same rule blocks flattening and squeezing
        // runs too late to help, so lift it here.
        let children = tree[id].children().to_vec();
        if children.len() == 1 && tree[children[0]].is_rule() && tree[children[0]].name == name {
            let child = children[0];
            tree.clear_children(id);
            let lifted = tree[child].children().to_vec();
            tree.add_children(id, lifted);
        }
    }

    let root = tree.root();
    visit(tree, root);
}

/// Collapse chains of single-child rules whose replacements coincide; such
/// chains would only produce redundant checks during minimization.
pub fn squeeze_tree(tree: &mut Tree) {
    fn squeeze(tree: &mut Tree, id: NodeId) -> NodeId {
        if tree[id].is_rule() {
            let children = tree[id].children().to_vec();
            for (i, child) in children.into_iter().enumerate() {
                let squeezed = squeeze(tree, child);
                if squeezed != child {
                    tree.set_child(id, i, squeezed);
                }
            }
            let children = tree[id].children();
            if children.len() == 1 && tree[children[0]].replace == tree[id].replace {
                return children[0];
            }
        }
        id
    }

    let root = tree.root();
    let squeezed = squeeze(tree, root);
    if squeezed != root {
        tree.set_root(squeezed);
    }
}

/// Mark nodes whose unparsing already equals their replacement as removed,
/// hiding them from the reducer: testing them costs runs but can never
/// shrink the output.
pub fn skip_unremovable(tree: &mut Tree, with_whitespace: bool) {
    fn visit(tree: &mut Tree, id: NodeId, with_whitespace: bool) {
        for child in tree[id].children().to_vec() {
            visit(tree, child, with_whitespace);
        }
        let unparsed = tree.unparse_node(id, with_whitespace);
        if tree[id].replace.as_deref() == Some(unparsed.as_str()) {
            tree[id].state = State::Removed;
        }
    }

    let root = tree.root();
    visit(tree, root, with_whitespace);
}

/// Mark tokens with whitespace-only text as removed.
///
/// Useful on trees built with hidden tokens, so the reducer only deals with
/// the hidden-but-non-whitespace ones.
pub fn skip_whitespace(tree: &mut Tree) {
    fn visit(tree: &mut Tree, id: NodeId) {
        if tree[id].is_rule() {
            for child in tree[id].children().to_vec() {
                visit(tree, child);
            }
            return;
        }
        let blank = tree[id]
            .text()
            .is_some_and(|text| !text.is_empty() && text.chars().all(char::is_whitespace));
        if blank {
            tree[id].state = State::Removed;
        }
    }

    let root = tree.root();
    visit(tree, root);
}
