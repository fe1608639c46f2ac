//! Position algebra: nullable, firstpos and lastpos per node.

use super::arena::{ExprArena, Node, NodeId};
use crate::parser::RepeatOp;

/// A set of leaf positions, kept sorted and free of duplicates so that equal
/// sets compare and hash equal regardless of construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionSet(Vec<NodeId>);

impl PositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(id: NodeId) -> Self {
        Self(vec![id])
    }

    pub fn from_unsorted(mut ids: Vec<NodeId>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }

    /// In-place union.
    pub fn extend(&mut self, other: &PositionSet) {
        if other.0.is_empty() {
            return;
        }
        if self.0.is_empty() {
            self.0.clone_from(&other.0);
            return;
        }
        let mut merged = Vec::with_capacity(self.0.len() + other.0.len());
        let (mut i, mut j) = (0, 0);
        let (a, b) = (&self.0, &other.0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(a[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(b[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    merged.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&a[i..]);
        merged.extend_from_slice(&b[j..]);
        self.0 = merged;
    }

    pub fn union(&self, other: &PositionSet) -> PositionSet {
        let mut out = self.clone();
        out.extend(other);
        out
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }
}

impl FromIterator<NodeId> for PositionSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

/// Per-node nullable/firstpos/lastpos, indexed by [`NodeId`].
///
/// Only the nodes passed to [`PositionAnalysis::compute`] carry values; the
/// rest stay empty and non-nullable.
#[derive(Debug, Clone)]
pub struct PositionAnalysis {
    nullable: Vec<bool>,
    firstpos: Vec<PositionSet>,
    lastpos: Vec<PositionSet>,
}

impl PositionAnalysis {
    /// `order` must list every node of the analyzed tree in ascending id
    /// order, as returned by [`ExprArena::subtree`].
    ///
    /// # Panics
    /// Panics on an unresolved `Variable` node.
    pub fn compute(arena: &ExprArena, order: &[NodeId]) -> Self {
        let len = arena.len();
        let mut analysis = Self {
            nullable: vec![false; len],
            firstpos: vec![PositionSet::new(); len],
            lastpos: vec![PositionSet::new(); len],
        };

        for &id in order {
            let (nullable, firstpos, lastpos) = match arena.get(id) {
                Node::Literal(_) | Node::EndMarker => {
                    (false, PositionSet::singleton(id), PositionSet::singleton(id))
                }
                Node::Tag(_) => (true, PositionSet::singleton(id), PositionSet::singleton(id)),
                Node::Alternation(a, b) => (
                    analysis.nullable(a) || analysis.nullable(b),
                    analysis.firstpos(a).union(analysis.firstpos(b)),
                    analysis.lastpos(a).union(analysis.lastpos(b)),
                ),
                Node::Concatenation(a, b) => {
                    let firstpos = if analysis.nullable(a) {
                        analysis.firstpos(a).union(analysis.firstpos(b))
                    } else {
                        analysis.firstpos(a).clone()
                    };
                    let lastpos = if analysis.nullable(b) {
                        analysis.lastpos(b).union(analysis.lastpos(a))
                    } else {
                        analysis.lastpos(b).clone()
                    };
                    (
                        analysis.nullable(a) && analysis.nullable(b),
                        firstpos,
                        lastpos,
                    )
                }
                // `+` is never nullable, even over a nullable body.
                Node::Repeat(inner, op) => (
                    op != RepeatOp::Plus,
                    analysis.firstpos(inner).clone(),
                    analysis.lastpos(inner).clone(),
                ),
                Node::Variable(sym) => {
                    unreachable!("variable `{}` survived resolution", arena.name(sym))
                }
            };
            let slot = id as usize;
            analysis.nullable[slot] = nullable;
            analysis.firstpos[slot] = firstpos;
            analysis.lastpos[slot] = lastpos;
        }

        analysis
    }

    #[inline]
    pub fn nullable(&self, id: NodeId) -> bool {
        self.nullable[id as usize]
    }

    #[inline]
    pub fn firstpos(&self, id: NodeId) -> &PositionSet {
        &self.firstpos[id as usize]
    }

    #[inline]
    pub fn lastpos(&self, id: NodeId) -> &PositionSet {
        &self.lastpos[id as usize]
    }
}
