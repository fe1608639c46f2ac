//! Lazy match iteration.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use serde::Serialize;
use tagdfa_core::{Automaton, DEAD_STATE, INITIAL_STATE, StateId, SymbolValue};

use super::trace::{NoopTracer, Tracer};

/// One maximal match: `input[start..=end]`, never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match<'m> {
    pub start: usize,
    /// Inclusive.
    pub end: usize,
    /// Tags of the accepting state the match ended in, sorted.
    pub tags: &'m [String],
}

impl Match<'_> {
    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The matched symbols.
    ///
    /// # Panics
    /// Panics if `input` is shorter than the scanned input.
    pub fn slice<'i>(&self, input: &'i [SymbolValue]) -> &'i [SymbolValue] {
        &input[self.range()]
    }
}

/// Iterator over the matches of an automaton in an input, in increasing
/// start order. Each call to `next` scans only as far as needed to produce
/// one match.
pub struct Matches<'m, 'i, T: Tracer = NoopTracer> {
    automaton: &'m Automaton,
    input: &'i [SymbolValue],
    pos: usize,
    tracer: T,
}

impl<'m, 'i, T: Tracer> Matches<'m, 'i, T> {
    pub(crate) fn new(automaton: &'m Automaton, input: &'i [SymbolValue], tracer: T) -> Self {
        Self {
            automaton,
            input,
            pos: 0,
            tracer,
        }
    }

    /// Where the next scan attempt starts.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn input(&self) -> &'i [SymbolValue] {
        self.input
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Walks from `start` and returns the last accepting position with its
    /// state.
    fn longest_from(&mut self, start: usize) -> Option<(usize, StateId)> {
        let input = self.input;
        let mut state = INITIAL_STATE;
        let mut last = None;

        for (pos, &symbol) in input.iter().enumerate().skip(start) {
            let next = self.automaton.next(state, symbol);
            if next == DEAD_STATE {
                self.tracer.trace_dead(pos, symbol, state);
                break;
            }
            self.tracer.trace_step(pos, symbol, state, next);
            state = next;

            if self.automaton.is_accepting(state) {
                self.tracer.trace_accept(pos, state);
                last = Some((pos, state));
            }
        }

        last
    }
}

impl<'m, T: Tracer> Iterator for Matches<'m, '_, T> {
    type Item = Match<'m>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let start = self.pos;
            self.tracer.trace_attempt(start);

            match self.longest_from(start) {
                Some((end, state)) => {
                    let tags = self.automaton.tags(state);
                    self.tracer.trace_match(start, end, tags);
                    self.pos = end + 1;
                    return Some(Match { start, end, tags });
                }
                None => {
                    self.tracer.trace_miss(start);
                    self.pos = start + 1;
                }
            }
        }

        None
    }
}

impl<T: Tracer> FusedIterator for Matches<'_, '_, T> {}
