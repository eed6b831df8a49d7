use crate::{all, from_ext, from_name};

#[test]
fn resolve_by_name_and_alias() {
    assert_eq!(from_name("json").unwrap().name(), "json");
    assert_eq!(from_name("JS").unwrap().name(), "javascript");
    assert_eq!(from_name("py").unwrap().name(), "python");
    assert!(from_name("cobol").is_none());
}

#[test]
fn resolve_by_extension() {
    assert_eq!(from_ext("json").unwrap().name(), "json");
    assert_eq!(from_ext("h").unwrap().name(), "c");
    assert!(from_ext("xyz").is_none());
}

#[test]
fn all_langs_parse_something() {
    assert_eq!(all().len(), 4);
    let tree = from_name("json").unwrap().parse("[1, 2]").unwrap();
    assert_eq!(tree.root_node().kind(), "document");
    assert!(!tree.root_node().has_error());
}
