//! Matching engine.
//!
//! Scanning uses maximal munch with restart-on-miss: from the current
//! position the automaton is walked from the initial state until it dies or
//! the input ends. The last accepting position reached ends the match and
//! scanning resumes right after it. If no accepting state was reached, the
//! scan restarts one symbol further.

mod handlers;
mod machine;
mod matches;
mod trace;

#[cfg(test)]
mod trace_tests;

pub use handlers::{Handler, Handlers};
pub use machine::StateMachine;
pub use matches::{Match, Matches};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
