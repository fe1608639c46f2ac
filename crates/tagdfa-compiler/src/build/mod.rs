//! Automaton builder.
//!
//! Direct construction of a DFA from a resolved [`Program`]: position
//! analysis over the augmented root, followpos, then subset construction.
//!
//! State ids are assigned in discovery order: 0 is the dead state, 1 the
//! initial state, and each further state gets the next id the first time a
//! transition reaches its position set. Symbols are tried in ascending order,
//! so building the same program twice yields identical automata.

mod followpos;
mod subset;

#[cfg(test)]
mod build_tests;

pub use followpos::FollowPos;

use tagdfa_core::Automaton;

use crate::Result;
use crate::program::{PositionAnalysis, Program};
use subset::SubsetBuilder;

/// Build the automaton for `program` with no state limit.
pub fn build(program: &Program) -> Result<Automaton> {
    build_with_state_limit(program, None)
}

/// Like [`build`], failing with `StateLimitExceeded` once more than
/// `state_limit` states (dead state included) would be needed.
pub fn build_with_state_limit(program: &Program, state_limit: Option<u32>) -> Result<Automaton> {
    let arena = program.arena();
    let root = program.augmented_root();
    let order = arena.subtree(root);

    let analysis = PositionAnalysis::compute(arena, &order);
    let follow = FollowPos::compute(arena, &order, &analysis);

    let alphabet_size = program.alphabet_size();
    let states = SubsetBuilder::new(arena, &follow, alphabet_size, state_limit)
        .run(analysis.firstpos(root).clone())?;

    Ok(Automaton::new(alphabet_size, states)?)
}
