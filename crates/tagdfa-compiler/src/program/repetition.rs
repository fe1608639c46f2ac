//! Lowering of bounded repetition onto `*`, `?` and concatenation.

use super::arena::{ExprArena, NodeId};
use super::lower::fold_concatenation;
use crate::parser::RepeatOp;
use crate::{Error, Result};

/// Expands `expr{min,max}` into `min` required copies followed by either one
/// `copy*` (unbounded) or `max - min` copies of `copy?`.
///
/// Every occurrence is a fresh deep copy of `expr`; `expr` itself is left
/// unused. `{0,0}` expands to nothing and fails with `EmptyExpression`.
pub fn build_repetition(
    arena: &mut ExprArena,
    expr: NodeId,
    min: u32,
    max: Option<u32>,
) -> Result<NodeId> {
    if let Some(max) = max
        && min > max
    {
        return Err(Error::InvalidRange { min, max });
    }

    let mut parts = Vec::new();
    for _ in 0..min {
        parts.push(arena.deep_copy(expr)?);
    }
    match max {
        None => {
            let copy = arena.deep_copy(expr)?;
            parts.push(arena.repeat(copy, RepeatOp::Star)?);
        }
        Some(max) => {
            for _ in min..max {
                let copy = arena.deep_copy(expr)?;
                parts.push(arena.repeat(copy, RepeatOp::Question)?);
            }
        }
    }

    fold_concatenation(arena, parts)
}
