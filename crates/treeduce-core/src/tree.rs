//! The HDD tree: an arena of rule and token nodes.
//!
//! Nodes live in a flat vector and refer to each other by [`NodeId`], so
//! parent back-references are plain indices instead of owning links. A node
//! detached by a transformation stays in the arena (unparsing a removed
//! subtree still needs its replacement string); only dropping the tree frees
//! nodes.

use crate::Position;

/// Identifies a node within its [`Tree`].
///
/// Ids are stable for the lifetime of the tree: transformations that keep a
/// node keep its id, and synthetic nodes get fresh ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Unparse state of a node.
///
/// A removed node contributes its replacement string to the output instead
/// of its text (or children); its subtree is hidden from level collection
/// but stays in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Keep,
    Removed,
}

/// Token flavour, carried next to the verbatim text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenClass {
    /// Ordinary token from the default channel.
    #[default]
    Normal,
    /// Token from a hidden channel (whitespace, comments); only built into
    /// the tree on request.
    Hidden,
    /// Unmatched input the recognizer could not tokenize.
    Error,
}

/// Rule flavour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RuleKind {
    #[default]
    Normal,
    /// Synthetic wrapper around a quantified span, so the whole span can be
    /// removed as a unit.
    Quantifier,
}

/// Payload distinguishing tokens from rules.
#[derive(Clone, Debug)]
pub enum NodeKind {
    Token { text: String, class: TokenClass },
    Rule { children: Vec<NodeId>, kind: RuleKind },
}

/// A single tree node.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub start: Option<Position>,
    pub end: Option<Position>,
    /// Minimal substitute string; rendered when the node is removed.
    pub replace: Option<String>,
    pub state: State,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

impl Node {
    pub fn token(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            replace: None,
            state: State::Keep,
            parent: None,
            kind: NodeKind::Token {
                text: text.into(),
                class: TokenClass::Normal,
            },
        }
    }

    pub fn rule(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            replace: None,
            state: State::Keep,
            parent: None,
            kind: NodeKind::Rule {
                children: Vec::new(),
                kind: RuleKind::Normal,
            },
        }
    }

    /// Synthetic quantifier rule: empty name, empty replacement.
    pub fn quantifier() -> Self {
        let mut node = Self::rule("");
        node.replace = Some(String::new());
        if let NodeKind::Rule { kind, .. } = &mut node.kind {
            *kind = RuleKind::Quantifier;
        }
        node
    }

    /// Error token: empty name, empty replacement.
    pub fn error_token(text: impl Into<String>) -> Self {
        let mut node = Self::token("", text);
        node.replace = Some(String::new());
        if let NodeKind::Token { class, .. } = &mut node.kind {
            *class = TokenClass::Error;
        }
        node
    }

    pub fn with_replace(mut self, replace: impl Into<String>) -> Self {
        self.replace = Some(replace.into());
        self
    }

    pub fn with_span(mut self, start: Position, end: Position) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn with_class(mut self, class: TokenClass) -> Self {
        if let NodeKind::Token { class: c, .. } = &mut self.kind {
            *c = class;
        }
        self
    }

    pub fn is_rule(&self) -> bool {
        matches!(self.kind, NodeKind::Rule { .. })
    }

    pub fn is_token(&self) -> bool {
        matches!(self.kind, NodeKind::Token { .. })
    }

    /// Children of a rule; empty slice for tokens.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Rule { children, .. } => children,
            NodeKind::Token { .. } => &[],
        }
    }

    /// Verbatim text of a token; `None` for rules.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Token { text, .. } => Some(text),
            NodeKind::Rule { .. } => None,
        }
    }

    /// Concrete variant name, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Token { class, .. } => match class {
                TokenClass::Normal => "token",
                TokenClass::Hidden => "hidden_token",
                TokenClass::Error => "error_token",
            },
            NodeKind::Rule { kind, .. } => match kind {
                RuleKind::Normal => "rule",
                RuleKind::Quantifier => "quantifier",
            },
        }
    }
}

/// Per-call overrides applied while unparsing, without mutating the tree.
///
/// `map` substitutes a node by another one (hoisting); `state` overrides the
/// effective state of a node (pruning). The default implementations render
/// the tree as stored.
pub trait UnparseView {
    fn map(&self, tree: &Tree, id: NodeId) -> NodeId {
        let _ = tree;
        id
    }

    fn state(&self, tree: &Tree, id: NodeId) -> State {
        tree[id].state
    }
}

/// Identity view: render the tree as stored.
pub struct NoopView;

impl UnparseView for NoopView {}

/// Arena of nodes plus the current root.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node and return its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn root(&self) -> NodeId {
        self.root.expect("tree has no root")
    }

    pub fn set_root(&mut self, root: NodeId) {
        self[root].parent = None;
        self.root = Some(root);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node in the arena, detached ones included.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    fn children_mut(&mut self, parent: NodeId) -> &mut Vec<NodeId> {
        match &mut self[parent].kind {
            NodeKind::Rule { children, .. } => children,
            NodeKind::Token { .. } => panic!("node {parent:?} is not a rule"),
        }
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.children_mut(parent).push(child);
        self[child].parent = Some(parent);
    }

    pub fn add_children(&mut self, parent: NodeId, children: impl IntoIterator<Item = NodeId>) {
        for child in children {
            self.add_child(parent, child);
        }
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.children_mut(parent).retain(|&c| c != child);
    }

    /// Overwrite the child slot at `index`, rewiring the parent link.
    pub fn set_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.children_mut(parent)[index] = child;
        self[child].parent = Some(parent);
    }

    /// Drop all children of a rule (the nodes stay in the arena).
    pub fn clear_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        std::mem::take(self.children_mut(parent))
    }

    /// Splice `new` into `old`'s place in its parent's child list.
    pub fn replace_with(&mut self, old: NodeId, new: NodeId) {
        let parent = self[old].parent.expect("cannot replace the root in place");
        let index = self[parent]
            .children()
            .iter()
            .position(|&c| c == old)
            .expect("node is not a child of its parent");
        self.set_child(parent, index, new);
    }

    /// Recompute rule spans from their children, bottom-up.
    ///
    /// Afterwards every rule with children starts where its first child
    /// starts and ends where its last child ends.
    pub fn calculate_boundaries(&mut self) {
        if let Some(root) = self.root {
            self.calculate_boundaries_from(root);
        }
    }

    fn calculate_boundaries_from(&mut self, id: NodeId) {
        let children: Vec<NodeId> = self[id].children().to_vec();
        for &child in &children {
            self.calculate_boundaries_from(child);
        }
        if self[id].is_rule()
            && let (Some(&first), Some(&last)) = (children.first(), children.last())
        {
            let (start, end) = (self[first].start, self[last].end);
            let node = &mut self[id];
            node.start = start;
            node.end = end;
        }
    }

    /// Render the whole tree.
    pub fn unparse(&self, with_whitespace: bool) -> String {
        match self.root {
            Some(root) => self.unparse_with(root, with_whitespace, &NoopView),
            None => String::new(),
        }
    }

    /// Render the subtree under `id` as stored.
    pub fn unparse_node(&self, id: NodeId, with_whitespace: bool) -> String {
        self.unparse_with(id, with_whitespace, &NoopView)
    }

    /// Render the subtree under `id` through a view.
    ///
    /// Never fails: a malformed tree renders to whatever its states dictate.
    pub fn unparse_with(&self, id: NodeId, with_whitespace: bool, view: &dyn UnparseView) -> String {
        let mut out = String::new();
        self.render(id, with_whitespace, view, &mut out);
        out
    }

    /// Multi-line structural rendering, for trace-level logging.
    pub fn dump(&self) -> String {
        fn visit(tree: &Tree, id: NodeId, depth: usize, out: &mut String) {
            let node = &tree[id];
            out.push_str(&"  ".repeat(depth));
            out.push_str(node.kind_name());
            if !node.name.is_empty() {
                out.push(' ');
                out.push_str(&node.name);
            }
            if let Some(text) = node.text() {
                out.push_str(&format!(" {text:?}"));
            }
            if node.state != State::Keep {
                out.push_str(" [removed]");
            }
            out.push('\n');
            if node.state == State::Keep {
                for &child in node.children() {
                    visit(tree, child, depth + 1, out);
                }
            }
        }

        let mut out = String::new();
        if let Some(root) = self.root {
            visit(self, root, 0, &mut out);
        }
        out
    }

    fn render(&self, id: NodeId, with_whitespace: bool, view: &dyn UnparseView, out: &mut String) {
        let id = view.map(self, id);
        let node = &self[id];

        if view.state(self, id) != State::Keep {
            if let Some(replace) = &node.replace {
                out.push_str(replace);
            }
            return;
        }

        let children = match &node.kind {
            NodeKind::Token { text, .. } => {
                out.push_str(text);
                return;
            }
            NodeKind::Rule { children, .. } => children,
        };

        // Concatenate the children, separating nonadjacent non-empty chunks
        // by a newline or a space. The gap is measured against the
        // immediately preceding sibling, whether or not it contributed
        // anything: a removed span still ends where it used to, which keeps
        // the text around it adjacent.
        let mut prev: Option<NodeId> = None;
        for &child in children {
            let mut chunk = String::new();
            self.render(child, with_whitespace, view, &mut chunk);
            if !chunk.is_empty() {
                if with_whitespace
                    && let Some(prev) = prev
                    && let (Some(start), Some(end)) = (self[child].start, self[prev].end)
                {
                    if start.line > end.line {
                        out.push('\n');
                    } else if start.column > end.column {
                        out.push(' ');
                    }
                }
                out.push_str(&chunk);
            }
            prev = Some(child);
        }
    }
}

impl std::ops::Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

impl std::ops::IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
}
