//! Build HDD trees from tree-sitter parses.
//!
//! Named interior nodes become rules, leaves become tokens with their
//! verbatim source slice, `ERROR`/missing nodes become error tokens, and
//! extras (comments and friends) become hidden tokens when requested.
//! Minimal replacements come from a user-supplied table keyed by node kind;
//! unlisted kinds default to the empty string for named nodes and to the
//! verbatim text for anonymous tokens, which keeps punctuation and keywords
//! in place.

use std::collections::HashMap;

use treeduce_core::{Node, NodeId, Position, TokenClass, Tree};
use treeduce_langs::Lang;

use crate::{Error, Result, transform};

/// Builder options.
#[derive(Clone, Debug, Default)]
pub struct BuildOptions {
    /// Replacement strings by node kind, overriding the defaults.
    pub replacements: HashMap<String, String>,
    /// Build extras into the tree as hidden tokens instead of eliding them.
    pub build_hidden_tokens: bool,
}

/// Parse `source` with `lang` and lower the parse tree into an HDD tree.
pub fn from_source(lang: &Lang, source: &str, options: &BuildOptions) -> Result<Tree> {
    let parsed = lang.parse(source).ok_or(Error::ParseFailed)?;
    let mut tree = Tree::new();
    let root = lower(&mut tree, parsed.root_node(), source, options);
    tree.set_root(root);
    transform::remove_empty_nodes(&mut tree);
    tree.calculate_boundaries();
    Ok(tree)
}

fn position(point: tree_sitter::Point) -> Position {
    // tree-sitter rows are 0-based, the tree model counts lines from 1.
    Position::new(point.row as u32 + 1, point.column as u32)
}

fn replacement(options: &BuildOptions, kind: &str, named: bool, text: &str) -> String {
    if let Some(replace) = options.replacements.get(kind) {
        return replace.clone();
    }
    if named { String::new() } else { text.to_owned() }
}

fn lower(
    tree: &mut Tree,
    node: tree_sitter::Node<'_>,
    source: &str,
    options: &BuildOptions,
) -> NodeId {
    let start = position(node.start_position());
    let end = position(node.end_position());
    let text = &source[node.byte_range()];

    if node.is_error() || node.is_missing() {
        // Unmatched input: keep the raw slice, drop the partial parse.
        let end = if node.is_missing() { start } else { end };
        return tree.push(Node::error_token(text).with_span(start, end));
    }

    let kind = node.kind();

    if node.child_count() == 0 {
        let class = if node.is_extra() {
            TokenClass::Hidden
        } else {
            TokenClass::Normal
        };
        let token = Node::token(kind, text)
            .with_replace(replacement(options, kind, node.is_named(), text))
            .with_span(start, end)
            .with_class(class);
        return tree.push(token);
    }

    let rule = tree.push(
        Node::rule(kind)
            .with_replace(replacement(options, kind, true, text))
            .with_span(start, end),
    );
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.is_extra() && !options.build_hidden_tokens {
            continue;
        }
        let lowered = lower(tree, child, source, options);
        tree.add_child(rule, lowered);
    }
    rule
}
