//! The runnable pattern.

use tagdfa_core::{Automaton, AutomatonError, SymbolValue};

use super::handlers::Handlers;
use super::matches::Matches;
use super::trace::{NoopTracer, Tracer};

/// A compiled pattern ready to scan inputs.
///
/// Immutable after construction: one machine can serve any number of scans,
/// from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMachine {
    automaton: Automaton,
}

impl StateMachine {
    pub fn new(automaton: Automaton) -> Self {
        Self { automaton }
    }

    /// Load an automaton produced by [`Automaton::to_json`].
    pub fn from_json(json: &str) -> Result<Self, AutomatonError> {
        Automaton::from_json(json).map(Self::new)
    }

    /// Load an automaton produced by [`Automaton::to_binary`].
    pub fn from_binary(bytes: &[u8]) -> Result<Self, AutomatonError> {
        Automaton::from_binary(bytes).map(Self::new)
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }

    pub fn alphabet_size(&self) -> u32 {
        self.automaton.alphabet_size()
    }

    /// Lazily scan `input` for maximal non-overlapping matches.
    pub fn matches<'i>(&self, input: &'i [SymbolValue]) -> Matches<'_, 'i> {
        Matches::new(&self.automaton, input, NoopTracer)
    }

    /// Like [`matches`](Self::matches), reporting every scan event to `tracer`.
    /// Pass `&mut tracer` to inspect it afterwards.
    pub fn matches_with<'i, T: Tracer>(
        &self,
        input: &'i [SymbolValue],
        tracer: T,
    ) -> Matches<'_, 'i, T> {
        Matches::new(&self.automaton, input, tracer)
    }

    /// Scan `input` to the end, calling the handler of each tag carried by
    /// each match. Tags without a handler are skipped.
    pub fn apply(&self, input: &[SymbolValue], handlers: &mut Handlers<'_>) {
        self.apply_with(input, handlers, NoopTracer);
    }

    pub fn apply_with<T: Tracer>(
        &self,
        input: &[SymbolValue],
        handlers: &mut Handlers<'_>,
        tracer: T,
    ) {
        for m in self.matches_with(input, tracer) {
            for tag in m.tags {
                if let Some(handler) = handlers.get_mut(tag) {
                    handler(m.start, m.end, m.slice(input));
                }
            }
        }
    }
}

impl From<Automaton> for StateMachine {
    fn from(automaton: Automaton) -> Self {
        Self::new(automaton)
    }
}
