//! followpos: which positions may come right after a given position.

use crate::parser::RepeatOp;
use crate::program::{ExprArena, Node, NodeId, PositionAnalysis, PositionSet};

/// followpos sets, indexed by position [`NodeId`].
#[derive(Debug, Clone)]
pub struct FollowPos {
    sets: Vec<PositionSet>,
}

impl FollowPos {
    /// `order` lists the analyzed tree in ascending id order, as passed to
    /// [`PositionAnalysis::compute`].
    ///
    /// - `Concatenation(a, b)`: every position in lastpos(a) is followed by
    ///   firstpos(b).
    /// - `Repeat(x, * | +)`: every position in lastpos(x) is followed by
    ///   firstpos(x).
    pub fn compute(arena: &ExprArena, order: &[NodeId], analysis: &PositionAnalysis) -> Self {
        let mut sets = vec![PositionSet::new(); arena.len()];

        for &id in order {
            let (from, to) = match arena.get(id) {
                Node::Concatenation(a, b) => (a, b),
                Node::Repeat(inner, RepeatOp::Star | RepeatOp::Plus) => (inner, inner),
                _ => continue,
            };
            let follow = analysis.firstpos(to);
            for pos in analysis.lastpos(from).iter() {
                sets[pos as usize].extend(follow);
            }
        }

        Self { sets }
    }

    #[inline]
    pub fn get(&self, pos: NodeId) -> &PositionSet {
        &self.sets[pos as usize]
    }
}
