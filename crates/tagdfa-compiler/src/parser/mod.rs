//! Front end for the pattern language.
//!
//! A small recursive-descent parser over logos tokens, producing an [`ast::Root`]
//! directly (no concrete syntax tree). Syntax errors are collected as
//! diagnostics with statement-level recovery: a broken statement is skipped up
//! to its terminating `;` and parsing resumes.
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) aborts with an error instead.

pub mod ast;
pub mod lexer;

mod core;
mod grammar;
mod syntax_kind;

#[cfg(test)]
mod lexer_tests;

pub use ast::{Assignment, Comment, Expr, RepeatOp, Root, Statement};
pub use core::{ParseResult, Parser};
pub use syntax_kind::SyntaxKind;

use crate::Error;
use lexer::lex;

/// Parse with no fuel limits. Returns Err only on fuel exhaustion.
pub fn parse(source: &str) -> Result<ParseResult, Error> {
    Parser::new(source, lex(source)).parse()
}
