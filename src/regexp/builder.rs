//! Fragment construction without epsilon edges.
//!
//! A `Fragment` is just a start state and a set of accept states inside the
//! builder's arena. Every composition splices copies of existing edges into
//! other states instead of linking fragments with epsilon transitions:
//!
//! - concatenation: the left accepts get copies of the right start's edges
//! - alternation: the left start gets copies of the right start's edges
//! - `?`, `+`, `*`: a fresh start copies the old start's edges; `+`/`*` also
//!   copy them into every accept state to form the loop
//!
//! Start states are never edge targets, which is what makes merging into a
//! start state safe.

use crate::automaton::{Nfa, StateArena, StateId};

use super::alphabet::CharPredicate;

/// A partially built automaton: entry state plus accepting states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accepts: Vec<StateId>,
}

impl Fragment {
    /// True if the fragment matches the empty string.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        self.accepts.contains(&self.start)
    }

    fn add_accept(&mut self, state: StateId) {
        if !self.accepts.contains(&state) {
            self.accepts.push(state);
        }
    }

    fn add_accepts(&mut self, states: &[StateId]) {
        for &state in states {
            self.add_accept(state);
        }
    }
}

/// Owns the state arena while one or more patterns are being built.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    arena: StateArena,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> &StateArena {
        &self.arena
    }

    /// Two fresh states joined by one edge per byte of `predicate`.
    pub fn value(&mut self, predicate: &CharPredicate) -> Fragment {
        let start = self.arena.alloc();
        let accept = self.arena.alloc();
        for byte in predicate.iter() {
            self.arena.push_edge(start, byte, accept);
        }
        Fragment {
            start,
            accepts: vec![accept],
        }
    }

    /// `left` followed by `right`.
    pub fn concatenate(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.arena.copy_edges_to_all(right.start, &left.accepts);

        let right_nullable = right.is_nullable();
        let mut result = Fragment {
            start: left.start,
            accepts: right.accepts,
        };
        if right_nullable {
            // Skipping `right` entirely must still accept after `left`
            result.add_accepts(&left.accepts);
        }
        result
    }

    /// Copy `from`'s edges onto `into`, so `into` also enters `from`'s
    /// automaton.
    pub fn merge_entry(&mut self, into: StateId, from: StateId) {
        self.arena.copy_edges(from, into);
    }

    /// `left | right`, reusing `left.start` as the merged entry.
    pub fn alternate(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.merge_entry(left.start, right.start);

        let right_nullable = right.is_nullable();
        let mut result = left;
        result.add_accepts(&right.accepts);
        if right_nullable {
            result.add_accept(result.start);
        }
        result
    }

    /// `f?`
    pub fn optional(&mut self, mut f: Fragment) -> Fragment {
        let start = self.arena.alloc_copy_of(f.start);
        f.start = start;
        f.add_accept(start);
        f
    }

    /// `f+`
    pub fn one_or_more(&mut self, mut f: Fragment) -> Fragment {
        let nullable = f.is_nullable();
        let start = self.arena.alloc_copy_of(f.start);
        self.arena.copy_edges_to_all(f.start, &f.accepts);
        f.start = start;
        if nullable {
            f.add_accept(start);
        }
        f
    }

    /// `f*`
    pub fn zero_or_more(&mut self, f: Fragment) -> Fragment {
        let mut f = self.one_or_more(f);
        f.add_accept(f.start);
        f
    }

    /// Finish a single pattern.
    pub fn finish(self, fragment: Fragment) -> Nfa {
        let accepts = fragment.accepts.into_iter().map(|s| (s, 0));
        Nfa::new(self.arena, fragment.start, accepts)
    }

    /// Finish with explicitly tagged accept states.
    pub fn finish_tagged(
        self,
        start: StateId,
        accepts: impl IntoIterator<Item = (StateId, usize)>,
    ) -> Nfa {
        Nfa::new(self.arena, start, accepts)
    }
}
