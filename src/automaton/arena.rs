//! Arena-based state allocation for cyclic NFA structures.
//!
//! States live in one append-only `Vec` and are referenced by `StateId`,
//! a plain index. Quantifiers create loops by copying edges whose
//! destinations point back into the same arena, so there is no ownership
//! cycle to manage.
//!
//! Edges are `(byte, destination)` values. Composition always copies them
//! into the receiving state's own edge list; no two states ever share a list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A state identifier - just an index into the arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub fn new(index: usize) -> Self {
        StateId(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labelled transition to another state in the same arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Edge {
    pub byte: u8,
    pub target: StateId,
}

impl Edge {
    #[inline]
    pub fn new(byte: u8, target: StateId) -> Self {
        Self { byte, target }
    }
}

/// A state in the arena: an ordered edge list.
///
/// Several edges may carry the same byte with different targets.
#[derive(Clone, Default, Debug)]
pub struct NfaState {
    pub edges: Vec<Edge>,
}

/// Arena for allocating NFA states.
#[derive(Clone, Default)]
pub struct StateArena {
    states: Vec<NfaState>,
}

impl fmt::Debug for StateArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateArena")
            .field("states_count", &self.states.len())
            .finish()
    }
}

impl StateArena {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Allocate a new state with no edges, returning its ID.
    pub fn alloc(&mut self) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(NfaState::default());
        id
    }

    /// Allocate a new state whose edge list is a copy of `source`'s.
    pub fn alloc_copy_of(&mut self, source: StateId) -> StateId {
        let edges = self.states[source.index()].edges.clone();
        let id = StateId::new(self.states.len());
        self.states.push(NfaState { edges });
        id
    }

    /// Append copies of every edge of `source` to `dest`.
    ///
    /// The source list is snapshotted first, so `source == dest` doubles the
    /// list instead of looping.
    pub fn copy_edges(&mut self, source: StateId, dest: StateId) {
        let edges = self.states[source.index()].edges.clone();
        self.states[dest.index()].edges.extend(edges);
    }

    /// Append copies of `source`'s edges to each state in `dests`.
    pub fn copy_edges_to_all(&mut self, source: StateId, dests: &[StateId]) {
        let edges = self.states[source.index()].edges.clone();
        for &dest in dests {
            self.states[dest.index()].edges.extend_from_slice(&edges);
        }
    }

    #[inline]
    pub fn push_edge(&mut self, from: StateId, byte: u8, to: StateId) {
        self.states[from.index()].edges.push(Edge::new(byte, to));
    }

    #[inline]
    pub fn get(&self, id: StateId) -> Option<&NfaState> {
        self.states.get(id.index())
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &NfaState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, state)| (StateId::new(i), state))
    }
}

impl std::ops::Index<StateId> for StateArena {
    type Output = NfaState;

    #[inline]
    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.index()]
    }
}
