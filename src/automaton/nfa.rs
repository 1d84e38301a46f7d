//! The finished epsilon-free NFA and its direct simulation.

use std::collections::BTreeMap;
use std::fmt;

use super::arena::{NfaState, StateArena, StateId};
use super::sparse_set::SparseSets;

/// A nondeterministic automaton over bytes 1..=255.
///
/// Accept states carry the index of the pattern they belong to. A single
/// compiled pattern tags everything with 0; the lexer uses one index per
/// token pattern.
#[derive(Clone, Debug)]
pub struct Nfa {
    states: StateArena,
    start: StateId,
    accepts: BTreeMap<StateId, usize>,
}

impl Nfa {
    /// Assemble an NFA. When a state is listed for several patterns the lowest
    /// index wins.
    pub fn new(
        states: StateArena,
        start: StateId,
        accepts: impl IntoIterator<Item = (StateId, usize)>,
    ) -> Self {
        let mut tagged = BTreeMap::new();
        for (state, pattern) in accepts {
            tagged
                .entry(state)
                .and_modify(|p: &mut usize| *p = (*p).min(pattern))
                .or_insert(pattern);
        }
        debug_assert!(
            states
                .iter()
                .all(|(_, s)| s.edges.iter().all(|e| e.target.index() < states.len())),
            "edge target outside the arena"
        );
        Self {
            states,
            start,
            accepts: tagged,
        }
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn states(&self) -> &StateArena {
        &self.states
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn is_accept(&self, id: StateId) -> bool {
        self.accepts.contains_key(&id)
    }

    /// Pattern index reported by an accept state.
    #[inline]
    pub fn accept_pattern(&self, id: StateId) -> Option<usize> {
        self.accepts.get(&id).copied()
    }

    /// Accept states in ascending order.
    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepts.keys().copied()
    }

    /// Decide membership by tracking the set of active states.
    pub fn is_match(&self, input: impl AsRef<[u8]>) -> bool {
        let mut sets = SparseSets::new(self.states.len());
        sets.current.insert(self.start);

        for &byte in input.as_ref() {
            let SparseSets { current, next } = &mut sets;
            for id in current.iter() {
                for edge in &self.states[id].edges {
                    if edge.byte == byte {
                        next.insert(edge.target);
                    }
                }
            }
            sets.advance();
            if sets.current.is_empty() {
                return false;
            }
        }

        let accepted = sets.current.iter().any(|id| self.is_accept(id));
        accepted
    }
}

impl fmt::Display for Nfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, state) in self.states.iter() {
            write!(f, "{}", id)?;
            if let Some(pattern) = self.accept_pattern(id) {
                write!(f, " (accept {})", pattern)?;
            }
            write!(f, " ->")?;

            // Group bytes by destination, keeping first-seen order
            let mut groups: Vec<(StateId, Vec<u8>)> = Vec::new();
            for edge in &state.edges {
                match groups.iter_mut().find(|(t, _)| *t == edge.target) {
                    Some((_, bytes)) => bytes.push(edge.byte),
                    None => groups.push((edge.target, vec![edge.byte])),
                }
            }
            for (target, mut bytes) in groups {
                bytes.sort_unstable();
                bytes.dedup();
                write!(f, " {}:", target)?;
                write_byte_ranges(f, &bytes)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "start: {}", self.start)
    }
}

/// Write a sorted, deduplicated byte list as `[a-c x]`.
pub(crate) fn write_byte_ranges(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "[")?;
    let mut i = 0;
    let mut first = true;
    while i < bytes.len() {
        let lo = bytes[i];
        let mut hi = lo;
        while i + 1 < bytes.len() && bytes[i + 1] == hi.wrapping_add(1) && hi != u8::MAX {
            i += 1;
            hi = bytes[i];
        }
        if !first {
            write!(f, " ")?;
        }
        first = false;
        write!(f, "{}", lo.escape_ascii())?;
        if hi != lo {
            write!(f, "-{}", hi.escape_ascii())?;
        }
        i += 1;
    }
    write!(f, "]")
}
