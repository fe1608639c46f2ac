//! AST to arena lowering.

use super::arena::{ExprArena, NodeId};
use super::repetition::build_repetition;
use crate::parser::Expr;
use crate::{Error, Result};

/// Lowers `expr` into fresh arena nodes.
///
/// References stay as `Variable` nodes for resolution. A tag lowers to
/// `Concatenation(body, Tag)`: the tag position follows its body, so it is in
/// the residual position set exactly when the body has been consumed.
pub fn lower_expr(arena: &mut ExprArena, expr: &Expr) -> Result<NodeId> {
    match expr {
        Expr::Literal(value) => arena.literal(*value),
        Expr::Ref(name) => arena.variable(name),
        Expr::Tag { name, body } => {
            let body = lower_expr(arena, body)?;
            let tag = arena.tag(name)?;
            arena.concatenation(body, tag)
        }
        Expr::Alt(items) => {
            let parts = lower_all(arena, items)?;
            fold_alternation(arena, parts)
        }
        Expr::Concat(items) => {
            let parts = lower_all(arena, items)?;
            fold_concatenation(arena, parts)
        }
        Expr::Repeat { inner, op } => {
            let inner = lower_expr(arena, inner)?;
            arena.repeat(inner, *op)
        }
        Expr::Range { inner, min, max } => {
            let inner = lower_expr(arena, inner)?;
            build_repetition(arena, inner, *min, *max)
        }
    }
}

fn lower_all(arena: &mut ExprArena, items: &[Expr]) -> Result<Vec<NodeId>> {
    items.iter().map(|item| lower_expr(arena, item)).collect()
}

/// Right-nested concatenation `a (b (c ...))`.
pub(crate) fn fold_concatenation(arena: &mut ExprArena, mut parts: Vec<NodeId>) -> Result<NodeId> {
    let mut acc = parts.pop().ok_or(Error::EmptyExpression)?;
    while let Some(part) = parts.pop() {
        acc = arena.concatenation(part, acc)?;
    }
    Ok(acc)
}

/// Right-nested alternation `a | (b | (c ...))`.
pub(crate) fn fold_alternation(arena: &mut ExprArena, mut parts: Vec<NodeId>) -> Result<NodeId> {
    let mut acc = parts.pop().ok_or(Error::EmptyExpression)?;
    while let Some(part) = parts.pop() {
        acc = arena.alternation(part, acc)?;
    }
    Ok(acc)
}
