//! Expression arena.
//!
//! Nodes are immutable once allocated and refer to their children by
//! [`NodeId`]. Children are always allocated before their parents, so every
//! child id is smaller than its parent's. Passes over a subtree walk ids in
//! ascending order instead of recursing, which keeps deeply nested patterns
//! (long alias chains, large `{m,n}` bounds) off the call stack.

use std::fmt::Write;

use tagdfa_core::{Interner, Symbol};

use crate::parser::RepeatOp;
use crate::{Error, Result};

/// Index of a node in an [`ExprArena`].
pub type NodeId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Literal(u32),
    /// Marks acceptance. At most one per arena.
    EndMarker,
    /// Zero-width named marker.
    Tag(Symbol),
    /// Reference to a declaration. Replaced during resolution.
    Variable(Symbol),
    Alternation(NodeId, NodeId),
    Concatenation(NodeId, NodeId),
    Repeat(NodeId, RepeatOp),
}

impl Node {
    /// Literal, tag and end-marker nodes are positions.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Literal(_) | Node::EndMarker | Node::Tag(_))
    }

    fn children(&self) -> [Option<NodeId>; 2] {
        match *self {
            Node::Alternation(a, b) | Node::Concatenation(a, b) => [Some(a), Some(b)],
            Node::Repeat(inner, _) => [Some(inner), None],
            Node::Literal(_) | Node::EndMarker | Node::Tag(_) | Node::Variable(_) => [None, None],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExprArena {
    nodes: Vec<Node>,
    names: Interner,
    end_marker: Option<NodeId>,
    node_limit: Option<u32>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocation fails with `NodeLimitExceeded` past `limit` nodes.
    pub fn with_node_limit(mut self, limit: Option<u32>) -> Self {
        self.node_limit = limit;
        self
    }

    fn alloc(&mut self, node: Node) -> Result<NodeId> {
        if let Some(limit) = self.node_limit
            && self.nodes.len() >= limit as usize
        {
            return Err(Error::NodeLimitExceeded(limit));
        }
        for child in node.children().into_iter().flatten() {
            debug_assert!((child as usize) < self.nodes.len(), "child allocated after parent");
        }
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        Ok(id)
    }

    pub fn literal(&mut self, value: u32) -> Result<NodeId> {
        self.alloc(Node::Literal(value))
    }

    pub fn tag(&mut self, name: &str) -> Result<NodeId> {
        let sym = self.names.intern(name);
        self.alloc(Node::Tag(sym))
    }

    pub fn variable(&mut self, name: &str) -> Result<NodeId> {
        let sym = self.names.intern(name);
        self.alloc(Node::Variable(sym))
    }

    pub fn alternation(&mut self, a: NodeId, b: NodeId) -> Result<NodeId> {
        self.alloc(Node::Alternation(a, b))
    }

    pub fn concatenation(&mut self, a: NodeId, b: NodeId) -> Result<NodeId> {
        self.alloc(Node::Concatenation(a, b))
    }

    pub fn repeat(&mut self, inner: NodeId, op: RepeatOp) -> Result<NodeId> {
        self.alloc(Node::Repeat(inner, op))
    }

    /// The end marker, allocated on first use.
    pub fn end_marker(&mut self) -> Result<NodeId> {
        if let Some(id) = self.end_marker {
            return Ok(id);
        }
        let id = self.alloc(Node::EndMarker)?;
        self.end_marker = Some(id);
        Ok(id)
    }

    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Node {
        self.nodes[id as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn name(&self, sym: Symbol) -> &str {
        self.names.resolve(sym)
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.names.intern(name)
    }

    /// Symbol for `name` if it was ever interned.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.names.get(name)
    }

    /// Every node reachable from `root`, in ascending id order (children
    /// before parents).
    pub fn subtree(&self, root: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; root as usize + 1];
        let mut stack = vec![root];
        let mut out = Vec::new();

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id as usize], true) {
                continue;
            }
            out.push(id);
            stack.extend(self.get(id).children().into_iter().flatten());
        }

        out.sort_unstable();
        out
    }

    /// Allocates a structurally identical copy of the subtree at `root`,
    /// with fresh ids for every node.
    pub fn deep_copy(&mut self, root: NodeId) -> Result<NodeId> {
        let order = self.subtree(root);
        let mut copies: Vec<NodeId> = Vec::with_capacity(order.len());
        let index_of = |order: &[NodeId], id: NodeId| order.binary_search(&id).ok();

        for &id in &order {
            let map = |child: NodeId| -> NodeId {
                match index_of(&order, child) {
                    Some(i) => copies[i],
                    None => child,
                }
            };
            let node = match self.get(id) {
                Node::Alternation(a, b) => Node::Alternation(map(a), map(b)),
                Node::Concatenation(a, b) => Node::Concatenation(map(a), map(b)),
                Node::Repeat(inner, op) => Node::Repeat(map(inner), op),
                leaf => leaf,
            };
            let copy = self.alloc(node)?;
            copies.push(copy);
        }

        // `root` has the largest id in its own subtree.
        Ok(copies[copies.len() - 1])
    }

    /// S-expression rendering of the subtree at `root`.
    ///
    /// ```text
    /// (| (. (. 1 0) <x>) (. (. 0 1) <y>))
    /// ```
    pub fn dump(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.format(root, &mut out)
            .expect("String write never fails");
        out
    }

    fn format(&self, root: NodeId, w: &mut String) -> std::fmt::Result {
        enum Item {
            Node(NodeId),
            Text(&'static str),
        }

        let mut stack = vec![Item::Node(root)];
        while let Some(item) = stack.pop() {
            let id = match item {
                Item::Text(text) => {
                    w.push_str(text);
                    continue;
                }
                Item::Node(id) => id,
            };
            match self.get(id) {
                Node::Literal(value) => write!(w, "{value}")?,
                Node::EndMarker => w.push('#'),
                Node::Tag(sym) => write!(w, "<{}>", self.name(sym))?,
                Node::Variable(sym) => w.push_str(self.name(sym)),
                Node::Alternation(a, b) => {
                    w.push_str("(| ");
                    stack.extend([Item::Text(")"), Item::Node(b), Item::Text(" "), Item::Node(a)]);
                }
                Node::Concatenation(a, b) => {
                    w.push_str("(. ");
                    stack.extend([Item::Text(")"), Item::Node(b), Item::Text(" "), Item::Node(a)]);
                }
                Node::Repeat(inner, op) => {
                    write!(w, "({} ", op.as_str())?;
                    stack.extend([Item::Text(")"), Item::Node(inner)]);
                }
            }
        }
        Ok(())
    }
}
