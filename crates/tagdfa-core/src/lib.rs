#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the tagdfa compiler and runtime.
//!
//! - [`Automaton`]: the compiled, immutable DFA (transition table, accepting
//!   flags, tag sets), with JSON and binary encodings
//! - [`Interner`]: string interning for variable and tag names
//! - [`Colors`]: ANSI palette for dumps and traces

mod automaton;
mod colors;
mod interner;


pub use automaton::{
    Automaton, AutomatonError, AutomatonPrinter, DEAD_STATE, INITIAL_STATE, State, StateId,
    SymbolValue,
};
pub use colors::Colors;
pub use interner::{Interner, Symbol};
