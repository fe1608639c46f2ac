//! Compiled deterministic automaton.
//!
//! States are indexed `0..N`. State 0 is the permanent dead state: it is never
//! accepting, never tagged, and every transition out of it leads back to 0.
//! State 1 is the initial state. Each state owns a dense transition row of
//! length `alphabet_size`.
//!
//! The automaton is built once and never mutated afterwards, so a shared
//! reference can be queried from any number of threads.

mod binary;
mod dump;
mod json;


use serde::{Deserialize, Serialize};

pub use dump::AutomatonPrinter;

/// Index of a state in [`Automaton::states`].
pub type StateId = u32;

/// A symbol of the input alphabet `[0, alphabet_size)`.
pub type SymbolValue = u32;

/// The dead ("no transition") state.
pub const DEAD_STATE: StateId = 0;

/// The state every scan attempt starts from.
pub const INITIAL_STATE: StateId = 1;

/// Errors produced when decoding or validating an automaton.
#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),

    #[error("malformed automaton: {0}")]
    Malformed(String),
}

/// A single DFA state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Next state per symbol; `DEAD_STATE` when there is no transition.
    pub transitions: Vec<StateId>,
    pub accepting: bool,
    /// Sorted, duplicate-free tag names.
    pub tags: Vec<String>,
}

impl State {
    /// A state with every transition leading to the dead state.
    pub fn new(alphabet_size: u32, accepting: bool, tags: Vec<String>) -> Self {
        Self {
            transitions: vec![DEAD_STATE; alphabet_size as usize],
            accepting,
            tags,
        }
    }

    /// The dead state for an alphabet of the given size.
    pub fn dead(alphabet_size: u32) -> Self {
        Self::new(alphabet_size, false, Vec::new())
    }

    /// Non-dead transitions as `(symbol, target)` pairs in symbol order.
    pub fn edges(&self) -> impl Iterator<Item = (SymbolValue, StateId)> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .filter(|(_, t)| **t != DEAD_STATE)
            .map(|(sym, t)| (sym as SymbolValue, *t))
    }
}

/// Compiled automaton: an ordered, validated list of states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    alphabet_size: u32,
    states: Vec<State>,
}

fn malformed(msg: impl Into<String>) -> Result<(), AutomatonError> {
    Err(AutomatonError::Malformed(msg.into()))
}

impl Automaton {
    /// Create an automaton, validating the structural invariants.
    pub fn new(alphabet_size: u32, states: Vec<State>) -> Result<Self, AutomatonError> {
        let automaton = Self {
            alphabet_size,
            states,
        };
        automaton.validate()?;
        Ok(automaton)
    }

    fn validate(&self) -> Result<(), AutomatonError> {
        if self.states.len() <= INITIAL_STATE as usize {
            return malformed(format!(
                "expected at least 2 states, found {}",
                self.states.len()
            ));
        }

        let count = self.states.len();
        for (id, state) in self.states.iter().enumerate() {
            if state.transitions.len() != self.alphabet_size as usize {
                return malformed(format!(
                    "state {id} has {} transitions, alphabet size is {}",
                    state.transitions.len(),
                    self.alphabet_size
                ));
            }
            if let Some(target) = state.transitions.iter().find(|t| **t as usize >= count) {
                return malformed(format!(
                    "state {id} transitions to {target}, only {count} states exist"
                ));
            }
            if state.tags.windows(2).any(|w| w[0] >= w[1]) {
                return malformed(format!("state {id} tags are not sorted and unique"));
            }
        }

        let dead = &self.states[DEAD_STATE as usize];
        if dead.accepting || !dead.tags.is_empty() || dead.edges().next().is_some() {
            return malformed("state 0 must be dead");
        }

        Ok(())
    }

    #[inline]
    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// # Panics
    /// Panics if `id` is out of range.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    /// Number of states, including the dead state.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a valid automaton has at least the dead and initial states.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Transition lookup. Symbols outside the alphabet lead to the dead state.
    #[inline]
    pub fn next(&self, from: StateId, symbol: SymbolValue) -> StateId {
        self.states[from as usize]
            .transitions
            .get(symbol as usize)
            .copied()
            .unwrap_or(DEAD_STATE)
    }

    #[inline]
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.states[id as usize].accepting
    }

    #[inline]
    pub fn tags(&self, id: StateId) -> &[String] {
        &self.states[id as usize].tags
    }

    /// Transition rows by state index.
    pub fn state_table(&self) -> Vec<Vec<StateId>> {
        self.states.iter().map(|s| s.transitions.clone()).collect()
    }

    /// Accepting flags by state index.
    pub fn accepting(&self) -> Vec<bool> {
        self.states.iter().map(|s| s.accepting).collect()
    }

    /// Tag sets by state index.
    pub fn tag_sets(&self) -> Vec<Vec<String>> {
        self.states.iter().map(|s| s.tags.clone()).collect()
    }

    /// Every distinct tag name carried by some state, sorted.
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .states
            .iter()
            .flat_map(|s| s.tags.iter().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}
