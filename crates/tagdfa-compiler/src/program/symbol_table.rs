//! Symbol table: in-order name binding and variable substitution.

use indexmap::IndexMap;
use tagdfa_core::Symbol;

use super::arena::{ExprArena, Node, NodeId};
use crate::{Error, Result};

/// Name bindings in declaration order.
///
/// A name is visible to declarations after its own. Rebinding replaces the
/// earlier binding for later references.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    bindings: IndexMap<Symbol, NodeId>,
    /// Names bound to a bare literal. These make up the alphabet.
    literals: IndexMap<Symbol, u32>,
    alphabet_size: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to an already-resolved expression. A bare literal also
    /// counts toward the alphabet size.
    pub fn bind(&mut self, arena: &ExprArena, name: Symbol, resolved: NodeId) {
        if let Node::Literal(value) = arena.get(resolved) {
            self.literals.insert(name, value);
            self.alphabet_size += 1;
        }
        self.bindings.insert(name, resolved);
    }

    pub fn lookup(&self, name: Symbol) -> Option<NodeId> {
        self.bindings.get(&name).copied()
    }

    pub fn literal(&self, name: Symbol) -> Option<u32> {
        self.literals.get(&name).copied()
    }

    pub fn literals(&self) -> impl Iterator<Item = (Symbol, u32)> + '_ {
        self.literals.iter().map(|(sym, value)| (*sym, *value))
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    /// Rewrites the subtree at `root` so that no `Variable` remains.
    ///
    /// Each reference is replaced by a fresh deep copy of its binding.
    /// Bindings are stored resolved, so the copy needs no further work.
    /// Subtrees without references keep their ids.
    pub fn resolve_expression(&self, arena: &mut ExprArena, root: NodeId) -> Result<NodeId> {
        let order = arena.subtree(root);
        let mut resolved: Vec<NodeId> = Vec::with_capacity(order.len());
        let lookup = |order: &[NodeId], resolved: &[NodeId], id: NodeId| -> NodeId {
            match order.binary_search(&id) {
                Ok(i) => resolved[i],
                Err(_) => id,
            }
        };

        for &id in &order {
            let new_id = match arena.get(id) {
                Node::Literal(_) | Node::EndMarker | Node::Tag(_) => id,
                Node::Variable(sym) => {
                    let bound = self
                        .lookup(sym)
                        .ok_or_else(|| Error::UndeclaredIdentifier(arena.name(sym).to_owned()))?;
                    arena.deep_copy(bound)?
                }
                Node::Alternation(a, b) => {
                    let (na, nb) = (lookup(&order, &resolved, a), lookup(&order, &resolved, b));
                    if (na, nb) == (a, b) {
                        id
                    } else {
                        arena.alternation(na, nb)?
                    }
                }
                Node::Concatenation(a, b) => {
                    let (na, nb) = (lookup(&order, &resolved, a), lookup(&order, &resolved, b));
                    if (na, nb) == (a, b) {
                        id
                    } else {
                        arena.concatenation(na, nb)?
                    }
                }
                Node::Repeat(inner, op) => {
                    let new_inner = lookup(&order, &resolved, inner);
                    if new_inner == inner {
                        id
                    } else {
                        arena.repeat(new_inner, op)?
                    }
                }
            };
            resolved.push(new_id);
        }

        Ok(resolved[resolved.len() - 1])
    }
}
