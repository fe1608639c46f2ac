//! tagdfa: tagged DFA pattern matching over integer symbol streams.
//!
//! A pattern is a list of declarations; `main` is the pattern root. Names
//! bound to a number form the alphabet, and `name:expr` attaches a tag that
//! is reported when a match ends right after `expr`.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//!
//! let machine = tagdfa_lib::compile("
//!     a = 0;
//!     b = 1;
//!     main = x:(b a) | y:(a b);
//! ").expect("valid pattern");
//!
//! let input = [1, 1, 1, 0, 0, 1];
//! let spans: Vec<_> = machine.matches(&input).map(|m| (m.start, m.end)).collect();
//! assert_eq!(spans, [(2, 3), (4, 5)]);
//!
//! let seen = RefCell::new(Vec::new());
//! let mut handlers = tagdfa_lib::Handlers::new()
//!     .on("y", |start, end, slice: &[u32]| seen.borrow_mut().push((start, end, slice.to_vec())));
//! machine.apply(&input, &mut handlers);
//! drop(handlers);
//! assert_eq!(seen.into_inner(), [(4, 5, vec![0, 1])]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]


pub use tagdfa_compiler::{
    CompileLimits, Diagnostics, DiagnosticsPrinter, Error, PatternBuilder, Program, Result, Span,
};
pub use tagdfa_core::{Automaton, AutomatonError, Colors, DEAD_STATE, INITIAL_STATE, State};
pub use tagdfa_vm::{
    Handler, Handlers, Match, Matches, NoopTracer, PrintTracer, StateMachine, Tracer, Verbosity,
};

/// Compile `source` with default limits and no host symbols.
pub fn compile(source: &str) -> Result<StateMachine> {
    compile_with(&PatternBuilder::new(source))
}

/// Compile `source` with host-provided symbols bound before its first
/// declaration.
pub fn compile_with_symbols(source: &str, symbols: &[(&str, u32)]) -> Result<StateMachine> {
    compile_with(&PatternBuilder::new(source).with_symbols(symbols))
}

/// Compile with a configured builder.
pub fn compile_with(builder: &PatternBuilder<'_>) -> Result<StateMachine> {
    builder.build().map(StateMachine::new)
}

/// Parse and resolve `source` without building the automaton.
pub fn parse(source: &str, symbols: &[(&str, u32)]) -> Result<Program> {
    PatternBuilder::new(source).with_symbols(symbols).parse()
}

/// Build the automaton for a resolved program.
pub fn build(program: &Program) -> Result<StateMachine> {
    tagdfa_compiler::build(program).map(StateMachine::new)
}
