//! tagdfa compiler: parser, program model, and automaton builder.
//!
//! This crate turns pattern source into a tagged DFA:
//! - `parser` - lexer and AST construction
//! - `program` - expression arena, variable resolution, position algebra
//! - `build` - followpos and subset construction
//! - `diagnostics` - error reporting
//! - [`PatternBuilder`] - high-level facade over the whole pipeline

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod diagnostics;
pub mod parser;
pub mod program;

mod pattern;


pub use build::{build, build_with_state_limit};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Span};
pub use pattern::{CompileLimits, PatternBuilder};
pub use program::Program;

use tagdfa_core::AutomatonError;

/// Errors that can occur while compiling a pattern.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("pattern parsing failed with {} errors", .0.error_count())]
    PatternParseError(Diagnostics),

    #[error("undeclared identifier `{0}`")]
    UndeclaredIdentifier(String),

    #[error("no `main` declaration")]
    MissingMain,

    #[error("invalid repetition bounds {{{min},{max}}}")]
    InvalidRange { min: u32, max: u32 },

    /// An alternation or concatenation with no operands.
    #[error("empty expression")]
    EmptyExpression,

    #[error("expression exceeds {0} nodes")]
    NodeLimitExceeded(u32),

    #[error("automaton exceeds {0} states")]
    StateLimitExceeded(u32),

    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
