//! Program model.
//!
//! Lowers parsed declarations into an [`ExprArena`], substitutes every variable
//! reference with a fresh copy of its binding, and exposes the resolved `main`
//! expression together with the alphabet size.

mod arena;
mod lower;
mod positions;
mod repetition;
mod symbol_table;

#[cfg(test)]
mod program_tests;

pub use arena::{ExprArena, Node, NodeId};
pub use lower::lower_expr;
pub use positions::{PositionAnalysis, PositionSet};
pub use repetition::build_repetition;
pub use symbol_table::SymbolTable;

use indexmap::IndexMap;

use crate::parser::Root;
use crate::{Error, Result};

/// Name of the declaration compiled as the pattern root.
pub const MAIN: &str = "main";

/// A resolved pattern, ready for automaton construction.
#[derive(Debug, Clone)]
pub struct Program {
    arena: ExprArena,
    root: NodeId,
    /// `Concatenation(root, EndMarker)`
    augmented: NodeId,
    end_marker: NodeId,
    alphabet_size: u32,
    literals: IndexMap<String, u32>,
}

impl Program {
    /// Resolves declarations in order.
    ///
    /// `symbols` are host-provided constants installed before the first
    /// declaration; each binds a name to a literal and counts toward the
    /// alphabet size.
    pub fn resolve(root: &Root, symbols: &[(&str, u32)]) -> Result<Self> {
        Self::resolve_with_limit(root, symbols, None)
    }

    /// Like [`Program::resolve`], failing with `NodeLimitExceeded` once the
    /// arena would grow past `node_limit`.
    pub fn resolve_with_limit(
        root: &Root,
        symbols: &[(&str, u32)],
        node_limit: Option<u32>,
    ) -> Result<Self> {
        let mut arena = ExprArena::new().with_node_limit(node_limit);
        let mut table = SymbolTable::new();

        for &(name, value) in symbols {
            let sym = arena.intern(name);
            let literal = arena.literal(value)?;
            table.bind(&arena, sym, literal);
        }

        for assignment in root.assignments() {
            let lowered = lower_expr(&mut arena, &assignment.value)?;
            let resolved = table.resolve_expression(&mut arena, lowered)?;
            let sym = arena.intern(&assignment.name);
            table.bind(&arena, sym, resolved);
        }

        let main = arena
            .symbol(MAIN)
            .and_then(|sym| table.lookup(sym))
            .ok_or(Error::MissingMain)?;
        let end_marker = arena.end_marker()?;
        let augmented = arena.concatenation(main, end_marker)?;

        let literals = table
            .literals()
            .map(|(sym, value)| (arena.name(sym).to_owned(), value))
            .collect();

        Ok(Self {
            arena,
            root: main,
            augmented,
            end_marker,
            alphabet_size: table.alphabet_size(),
            literals,
        })
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    /// The resolved `main` expression.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The root followed by the end marker.
    pub fn augmented_root(&self) -> NodeId {
        self.augmented
    }

    pub fn end_marker(&self) -> NodeId {
        self.end_marker
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    /// Value of a name bound to a bare literal.
    pub fn literal(&self, name: &str) -> Option<u32> {
        self.literals.get(name).copied()
    }

    /// Literal-bound names in binding order.
    pub fn literals(&self) -> impl Iterator<Item = (&str, u32)> {
        self.literals.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// S-expression rendering of the resolved `main`.
    pub fn dump(&self) -> String {
        self.arena.dump(self.root)
    }
}
