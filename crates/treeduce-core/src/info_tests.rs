use crate::{Node, State, Tree, TokenClass, info};

fn sample_tree() -> (Tree, crate::NodeId) {
    // start
    // ├── item (rule)
    // │   ├── "x" (token)
    // │   └── quantifier
    // │       └── " " (hidden token)
    // └── "y" (token)
    let mut tree = Tree::new();
    let x = tree.push(Node::token("X", "x"));
    let ws = tree.push(Node::token("WS", " ").with_class(TokenClass::Hidden));
    let quant = tree.push(Node::quantifier());
    tree.add_child(quant, ws);
    let item = tree.push(Node::rule("item"));
    tree.add_children(item, [x, quant]);
    let y = tree.push(Node::token("Y", "y"));
    let root = tree.push(Node::rule("start"));
    tree.add_children(root, [item, y]);
    tree.set_root(root);
    (tree, item)
}

#[test]
fn count_by_kind() {
    let (tree, _) = sample_tree();
    let stats = info::count(&tree);
    assert_eq!(stats.get("rule"), Some(&2));
    assert_eq!(stats.get("quantifier"), Some(&1));
    assert_eq!(stats.get("token"), Some(&2));
    assert_eq!(stats.get("hidden_token"), Some(&1));
}

#[test]
fn count_skips_removed_subtrees() {
    let (mut tree, item) = sample_tree();
    tree[item].state = State::Removed;
    let stats = info::count(&tree);
    assert_eq!(stats.get("rule"), Some(&1));
    assert_eq!(stats.get("token"), Some(&1));
    assert_eq!(stats.get("quantifier"), None);
}

#[test]
fn height_of_live_tree() {
    let (mut tree, item) = sample_tree();
    assert_eq!(info::height(&tree), 4);
    tree[item].state = State::Removed;
    assert_eq!(info::height(&tree), 2);
}

#[test]
fn shape_counts_per_level() {
    let (tree, _) = sample_tree();
    assert_eq!(info::shape(&tree), vec![1, 2, 2, 1]);
}

#[test]
fn shape_of_single_token() {
    let mut tree = Tree::new();
    let t = tree.push(Node::token("T", "t"));
    tree.set_root(t);
    assert_eq!(info::shape(&tree), vec![1]);
    assert_eq!(info::height(&tree), 1);
}
