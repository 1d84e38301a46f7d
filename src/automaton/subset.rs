//! Powerset construction: NFA to DFA.
//!
//! Every DFA state stands for a set of NFA states. Sets are keyed by their
//! sorted, deduplicated member list, so two discoveries of the same states in
//! a different order land on the same DFA state.

use log::trace;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use super::arena::StateId;
use super::dfa::{Dfa, DfaStateId, TransitionRow, BYTE_CEILING};
use super::nfa::Nfa;

/// Canonical (sorted, unique) set of NFA states.
type StateSet = SmallVec<[StateId; 8]>;

/// Raised when a configured DFA size limit is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("DFA exceeds the limit of {limit} states")]
pub struct StateLimitExceeded {
    pub limit: usize,
}

/// Convert `nfa` into an equivalent DFA.
///
/// With `state_limit` set, construction stops as soon as a new state would
/// push the DFA past the limit. The result is not minimized.
pub fn determinize(nfa: &Nfa, state_limit: Option<usize>) -> Result<Dfa, StateLimitExceeded> {
    let mut ids: FxHashMap<StateSet, DfaStateId> = FxHashMap::default();
    let mut subsets: Vec<StateSet> = Vec::new();
    let mut rows: Vec<TransitionRow> = Vec::new();

    let start: StateSet = SmallVec::from_elem(nfa.start(), 1);
    ids.insert(start.clone(), DfaStateId::START);
    subsets.push(start);

    let mut buckets: Vec<StateSet> = (0..BYTE_CEILING).map(|_| StateSet::new()).collect();

    // `subsets` doubles as the worklist: everything past `rows.len()` is
    // still unprocessed.
    while rows.len() < subsets.len() {
        let current = rows.len();

        for bucket in buckets.iter_mut() {
            bucket.clear();
        }
        for &state in &subsets[current] {
            for edge in &nfa.state(state).edges {
                buckets[edge.byte as usize].push(edge.target);
            }
        }

        let mut unpacked = [None; BYTE_CEILING];
        // Byte 0 is outside the alphabet.
        for byte in 1..BYTE_CEILING {
            let bucket = &mut buckets[byte];
            if bucket.is_empty() {
                continue;
            }
            bucket.sort_unstable();
            bucket.dedup();

            let target = match ids.get(bucket.as_slice()) {
                Some(&id) => id,
                None => {
                    if let Some(limit) = state_limit {
                        if subsets.len() >= limit {
                            return Err(StateLimitExceeded { limit });
                        }
                    }
                    let id = DfaStateId::new(subsets.len());
                    trace!("dfa state {} = {:?}", id, bucket.as_slice());
                    ids.insert(bucket.clone(), id);
                    subsets.push(bucket.clone());
                    id
                }
            };
            unpacked[byte] = Some(target);
        }

        rows.push(TransitionRow::pack(&unpacked));
    }

    let accepts = subsets
        .iter()
        .map(|set| set.iter().filter_map(|&s| nfa.accept_pattern(s)).min())
        .collect();

    Ok(Dfa::new(rows, accepts))
}
