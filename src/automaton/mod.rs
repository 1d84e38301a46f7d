//! Finite automata over the byte alphabet.
//!
//! - `arena`: `StateId`, `Edge` and the append-only `StateArena`
//! - `nfa`: the finished epsilon-free NFA and its simulation
//! - `subset`: powerset construction from NFA to DFA
//! - `dfa`: the packed DFA and its runner
//! - `sparse_set`: active-state sets for NFA simulation

mod arena;
mod dfa;
mod nfa;
mod sparse_set;
mod subset;

pub use arena::{Edge, NfaState, StateArena, StateId};
pub use dfa::{Dfa, DfaStateId, InvalidTransitionRow, TransitionRow, BYTE_CEILING};
pub use nfa::Nfa;
pub use sparse_set::{SparseSet, SparseSets};
pub use subset::{determinize, StateLimitExceeded};

#[cfg(test)]
mod tests;
