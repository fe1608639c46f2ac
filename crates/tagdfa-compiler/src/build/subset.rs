//! Subset construction over followpos.

use std::collections::BTreeMap;

use indexmap::IndexSet;
use tagdfa_core::{DEAD_STATE, State, StateId, SymbolValue};

use super::followpos::FollowPos;
use crate::program::{ExprArena, Node, PositionSet};
use crate::{Error, Result};

/// Incremental DFA construction.
///
/// Each distinct position set is a state; its index in `sets` is its id.
/// Index 0 holds the empty set (the dead state) and index 1 the initial set.
/// States are expanded in id order, so `sets` doubles as the FIFO worklist.
pub(super) struct SubsetBuilder<'a> {
    arena: &'a ExprArena,
    follow: &'a FollowPos,
    alphabet_size: u32,
    state_limit: Option<u32>,
    sets: IndexSet<PositionSet>,
    rows: Vec<Vec<StateId>>,
}

impl<'a> SubsetBuilder<'a> {
    pub(super) fn new(
        arena: &'a ExprArena,
        follow: &'a FollowPos,
        alphabet_size: u32,
        state_limit: Option<u32>,
    ) -> Self {
        Self {
            arena,
            follow,
            alphabet_size,
            state_limit,
            sets: IndexSet::new(),
            rows: Vec::new(),
        }
    }

    /// Runs the construction from `initial` and returns the states in id
    /// order.
    pub(super) fn run(mut self, initial: PositionSet) -> Result<Vec<State>> {
        self.intern(PositionSet::new())?;
        self.intern(initial)?;
        self.rows.push(vec![DEAD_STATE; self.alphabet_size as usize]);

        let mut next = 1;
        while next < self.sets.len() {
            let row = self.expand(next)?;
            self.rows.push(row);
            next += 1;
        }

        let states = self
            .sets
            .iter()
            .zip(self.rows)
            .map(|(set, transitions)| {
                let (accepting, tags) = describe(self.arena, set);
                State {
                    transitions,
                    accepting,
                    tags,
                }
            })
            .collect();
        Ok(states)
    }

    /// Transition row of state `id`. May discover new states.
    fn expand(&mut self, id: usize) -> Result<Vec<StateId>> {
        let mut targets: BTreeMap<SymbolValue, PositionSet> = BTreeMap::new();
        let set = &self.sets[id];
        for pos in set.iter() {
            if let Node::Literal(value) = self.arena.get(pos)
                && value < self.alphabet_size
            {
                targets.entry(value).or_default().extend(self.follow.get(pos));
            }
        }

        let mut row = vec![DEAD_STATE; self.alphabet_size as usize];
        for (symbol, target) in targets {
            if target.is_empty() {
                continue;
            }
            row[symbol as usize] = self.intern(target)?;
        }
        Ok(row)
    }

    fn intern(&mut self, set: PositionSet) -> Result<StateId> {
        if let Some(id) = self.sets.get_index_of(&set) {
            return Ok(id as StateId);
        }
        if let Some(limit) = self.state_limit
            && self.sets.len() >= limit as usize
        {
            return Err(Error::StateLimitExceeded(limit));
        }
        let (id, _) = self.sets.insert_full(set);
        Ok(id as StateId)
    }
}

/// Accepting flag and sorted unique tag names of a position set.
fn describe(arena: &ExprArena, set: &PositionSet) -> (bool, Vec<String>) {
    let mut accepting = false;
    let mut tags: Vec<String> = Vec::new();
    for pos in set.iter() {
        match arena.get(pos) {
            Node::EndMarker => accepting = true,
            Node::Tag(sym) => tags.push(arena.name(sym).to_owned()),
            _ => {}
        }
    }
    tags.sort_unstable();
    tags.dedup();
    (accepting, tags)
}

