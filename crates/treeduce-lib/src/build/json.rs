//! JSON tree interchange.
//!
//! The document is a single recursive node object. A node carries either
//! `text` (token) or `children` (rule), never both; `class` selects the
//! concrete variant beyond the default token/rule:
//!
//! ```json
//! {
//!   "name": "pair",
//!   "replace": "\"\":\"\"",
//!   "children": [
//!     {"name": "STRING", "text": "\"foo\"", "replace": "\"\"",
//!      "start": {"line": 1, "column": 1}, "end": {"line": 1, "column": 6}},
//!     {"name": "", "text": ":", "replace": ":"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use treeduce_core::{Node, NodeId, NodeKind, Position, RuleKind, TokenClass, Tree};

use crate::{Error, Result, transform};

/// Raw node as it appears in the interchange document; a 1:1 mapping that
/// is lowered into the arena in a second step.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawNode {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
    /// `"hidden"` or `"error"` for tokens, `"quantifier"` for rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// Build a tree from an interchange document.
pub fn from_json(document: &str) -> Result<Tree> {
    let raw: RawNode = serde_json::from_str(document)?;
    let mut tree = Tree::new();
    let root = lower(&mut tree, &raw)?;
    tree.set_root(root);
    transform::remove_empty_nodes(&mut tree);
    tree.calculate_boundaries();
    Ok(tree)
}

/// Serialize a tree back into the interchange form.
pub fn to_json(tree: &Tree) -> Result<String> {
    Ok(serde_json::to_string_pretty(&raise(tree, tree.root()))?)
}

fn lower(tree: &mut Tree, raw: &RawNode) -> Result<NodeId> {
    let mut node = match (&raw.text, &raw.children) {
        (Some(_), Some(_)) => {
            return Err(Error::InvalidTree(format!(
                "node {:?} has both text and children",
                raw.name
            )));
        }
        (None, None) => {
            return Err(Error::InvalidTree(format!(
                "node {:?} has neither text nor children",
                raw.name
            )));
        }
        (Some(text), None) => match raw.class.as_deref() {
            None => Node::token(raw.name.clone(), text.clone()),
            Some("hidden") => {
                Node::token(raw.name.clone(), text.clone()).with_class(TokenClass::Hidden)
            }
            Some("error") => Node::error_token(text.clone()),
            Some(other) => {
                return Err(Error::InvalidTree(format!("unknown token class {other:?}")));
            }
        },
        (None, Some(_)) => match raw.class.as_deref() {
            None => Node::rule(raw.name.clone()),
            Some("quantifier") => Node::quantifier(),
            Some(other) => {
                return Err(Error::InvalidTree(format!("unknown rule class {other:?}")));
            }
        },
    };

    if raw.replace.is_some() {
        node.replace = raw.replace.clone();
    }
    node.start = raw.start;
    node.end = raw.end;

    let id = tree.push(node);
    if let Some(children) = &raw.children {
        for child in children {
            let lowered = lower(tree, child)?;
            tree.add_child(id, lowered);
        }
    }
    Ok(id)
}

fn raise(tree: &Tree, id: NodeId) -> RawNode {
    let node = &tree[id];
    let (text, children, class) = match &node.kind {
        NodeKind::Token { text, class } => {
            let class = match class {
                TokenClass::Normal => None,
                TokenClass::Hidden => Some("hidden".to_owned()),
                TokenClass::Error => Some("error".to_owned()),
            };
            (Some(text.clone()), None, class)
        }
        NodeKind::Rule { children, kind } => {
            let class = match kind {
                RuleKind::Normal => None,
                RuleKind::Quantifier => Some("quantifier".to_owned()),
            };
            let children = children.iter().map(|&child| raise(tree, child)).collect();
            (None, Some(children), class)
        }
    };

    RawNode {
        name: node.name.clone(),
        text,
        children,
        replace: node.replace.clone(),
        start: node.start,
        end: node.end,
        class,
    }
}
