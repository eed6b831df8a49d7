use crate::builders::PruningTestBuilder;
use crate::cache::Cache;
use crate::dd::{ConfigTest, EmptyDd};
use crate::test_support::{MemCache, SubstringOracle, flat_tree, tok};
use crate::{Outcome, TestId};

use treeduce_core::{Node, Tree};

#[test]
fn test_id_renders_as_path() {
    let id = TestId::segment("p0").child("i1").child("l2");
    assert_eq!(id.to_string(), "p0/i1/l2");
    assert_eq!(id.segments().len(), 3);

    let joined = id.join(&TestId::segment("r0").child("m3"));
    assert_eq!(joined.to_string(), "p0/i1/l2/r0/m3");
    assert_eq!(TestId::new().to_string(), "");
}

#[test]
fn config_test_prefixes_relative_ids() {
    let (tree, ids) = flat_tree();
    let builder = PruningTestBuilder::new(&tree, ids, true);
    let oracle = SubstringOracle::new("a");
    let test = ConfigTest::new(&builder, &oracle, None, TestId::segment("p0"));

    assert_eq!(test.outcome(&ids, &TestId::segment("x")), Outcome::Fail);
    assert_eq!(test.id_prefix().to_string(), "p0");
}

#[test]
fn config_test_consults_the_cache_by_content() {
    let (tree, ids) = flat_tree();
    let builder = PruningTestBuilder::new(&tree, ids, true);
    let oracle = SubstringOracle::new("a");
    let cache = MemCache::default();
    let test = ConfigTest::new(&builder, &oracle, Some(&cache), TestId::new());

    let config = [ids[0], ids[1]];
    assert_eq!(test.outcome(&config, &TestId::segment("t0")), Outcome::Fail);
    assert_eq!(test.outcome(&config, &TestId::segment("t1")), Outcome::Fail);
    // The second call is served from the cache.
    assert_eq!(oracle.evaluations(), 1);

    cache.clear();
    assert_eq!(test.outcome(&config, &TestId::segment("t2")), Outcome::Fail);
    assert_eq!(oracle.evaluations(), 2);
}

fn single_node_tree() -> (Tree, treeduce_core::NodeId) {
    let mut tree = Tree::new();
    let a = tok(&mut tree, "A", "a", 0);
    let root = tree.push(Node::rule("start").with_replace(""));
    tree.add_child(root, a);
    tree.set_root(root);
    (tree, a)
}

#[test]
fn empty_dd_accepts_the_empty_configuration() {
    let (tree, a) = single_node_tree();
    let builder = PruningTestBuilder::new(&tree, [a], true);
    // Everything is interesting, even the empty candidate.
    let oracle = SubstringOracle::new("");
    let test = ConfigTest::new(&builder, &oracle, None, TestId::new());

    assert_eq!(EmptyDd.ddmin(vec![a], &test), vec![]);
}

#[test]
fn empty_dd_keeps_the_element_when_empty_passes() {
    let (tree, a) = single_node_tree();
    let builder = PruningTestBuilder::new(&tree, [a], true);
    let oracle = SubstringOracle::new("a");
    let test = ConfigTest::new(&builder, &oracle, None, TestId::new());

    assert_eq!(EmptyDd.ddmin(vec![a], &test), vec![a]);
    // Exactly one candidate was evaluated: the empty one.
    assert_eq!(oracle.seen.lock().unwrap().as_slice(), &[String::new()]);
}
