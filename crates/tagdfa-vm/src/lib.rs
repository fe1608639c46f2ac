//! Runtime for executing compiled tagdfa automata.
//!
//! This crate scans symbol sequences with a compiled [`tagdfa_core::Automaton`],
//! reporting maximal non-overlapping matches and the tags of their accepting
//! states.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    Handler, Handlers, Match, Matches, NoopTracer, PrintTracer, StateMachine, Tracer, Verbosity,
};
