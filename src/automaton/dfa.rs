//! The compiled deterministic automaton and its runner.
//!
//! Each DFA state owns one `TransitionRow`, a compact byte-range table: each
//! ceiling marks the exclusive upper bound of a run of bytes that all go to
//! the same step.
//!
//! ```text
//! [a-c] then `z`:
//! ceilings: [0x61, 0x64, 0x7a, 0x7b, 0x100]
//! steps:    [None, Some(1), None, Some(2), None]
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::nfa::write_byte_ranges;

/// Exclusive upper bound of the byte alphabet.
pub const BYTE_CEILING: usize = 0x100;

/// Index of a DFA state. The start state is always 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct DfaStateId(u32);

impl DfaStateId {
    pub const START: DfaStateId = DfaStateId(0);

    #[inline]
    pub fn new(index: usize) -> Self {
        DfaStateId(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for DfaStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A packed map from byte to destination state. Absent entries reject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransitionRow")]
pub struct TransitionRow {
    ceilings: Vec<u16>,
    steps: Vec<Option<DfaStateId>>,
}

/// A deserialized row whose ceilings do not partition the byte alphabet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transition row: {reason}")]
pub struct InvalidTransitionRow {
    reason: &'static str,
}

#[derive(Deserialize)]
struct RawTransitionRow {
    ceilings: Vec<u16>,
    steps: Vec<Option<DfaStateId>>,
}

impl TryFrom<RawTransitionRow> for TransitionRow {
    type Error = InvalidTransitionRow;

    fn try_from(raw: RawTransitionRow) -> Result<Self, Self::Error> {
        let invalid = |reason: &'static str| Err(InvalidTransitionRow { reason });
        if raw.ceilings.len() != raw.steps.len() {
            return invalid("ceilings and steps differ in length");
        }
        if raw.ceilings.last() != Some(&(BYTE_CEILING as u16)) {
            return invalid("last ceiling must be 256");
        }
        let mut floor = 0;
        for &ceiling in &raw.ceilings {
            if ceiling <= floor {
                return invalid("ceilings must be positive and strictly increasing");
            }
            floor = ceiling;
        }
        Ok(Self {
            ceilings: raw.ceilings,
            steps: raw.steps,
        })
    }
}

impl Default for TransitionRow {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionRow {
    /// A row with no transitions.
    pub fn new() -> Self {
        Self {
            ceilings: vec![BYTE_CEILING as u16],
            steps: vec![None],
        }
    }

    /// Pack a fully unpacked row (one slot per byte).
    pub fn pack(unpacked: &[Option<DfaStateId>; BYTE_CEILING]) -> Self {
        let mut ceilings = Vec::new();
        let mut steps = Vec::new();

        let mut current = unpacked[0];
        for (i, &step) in unpacked.iter().enumerate() {
            if step != current {
                ceilings.push(i as u16);
                steps.push(current);
                current = step;
            }
        }
        ceilings.push(BYTE_CEILING as u16);
        steps.push(current);

        Self { ceilings, steps }
    }

    /// Destination for `byte`, if any.
    #[inline]
    pub fn step(&self, byte: u8) -> Option<DfaStateId> {
        let i = self.ceilings.partition_point(|&c| c <= u16::from(byte));
        self.steps.get(i).copied().flatten()
    }

    /// Inclusive byte ranges that have a transition, with their destination.
    pub fn ranges(&self) -> impl Iterator<Item = (u8, u8, DfaStateId)> + '_ {
        let floors = std::iter::once(0u16).chain(self.ceilings.iter().copied());
        floors
            .zip(self.ceilings.iter().copied())
            .zip(self.steps.iter().copied())
            .filter_map(|((lo, hi), step)| step.map(|s| (lo as u8, (hi - 1) as u8, s)))
    }

    /// Every `(byte, destination)` pair, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, DfaStateId)> + '_ {
        self.ranges()
            .flat_map(|(lo, hi, s)| (lo..=hi).map(move |b| (b, s)))
    }

    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(Option::is_none)
    }
}

/// A deterministic automaton produced by subset construction.
///
/// The DFA holds no reference to the NFA it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dfa {
    rows: Vec<TransitionRow>,
    /// Per state: the lowest pattern index it accepts for, if accepting.
    accepts: Vec<Option<usize>>,
}

impl Dfa {
    pub(crate) fn new(rows: Vec<TransitionRow>, accepts: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(rows.len(), accepts.len());
        Self { rows, accepts }
    }

    #[inline]
    pub fn start(&self) -> DfaStateId {
        DfaStateId::START
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, state: DfaStateId) -> Option<&TransitionRow> {
        self.rows.get(state.index())
    }

    pub fn rows(&self) -> &[TransitionRow] {
        &self.rows
    }

    #[inline]
    pub fn next_state(&self, state: DfaStateId, byte: u8) -> Option<DfaStateId> {
        self.rows.get(state.index())?.step(byte)
    }

    #[inline]
    pub fn is_accept(&self, state: DfaStateId) -> bool {
        self.accept_pattern(state).is_some()
    }

    #[inline]
    pub fn accept_pattern(&self, state: DfaStateId) -> Option<usize> {
        self.accepts.get(state.index()).copied().flatten()
    }

    /// Accepting states in ascending order.
    pub fn accept_states(&self) -> impl Iterator<Item = DfaStateId> + '_ {
        self.accepts
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_some())
            .map(|(i, _)| DfaStateId::new(i))
    }

    /// Whole-input membership. A byte with no transition rejects.
    pub fn is_match(&self, input: impl AsRef<[u8]>) -> bool {
        let mut state = self.start();
        for &byte in input.as_ref() {
            match self.next_state(state, byte) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accept(state)
    }

    /// Length of the longest accepted prefix of `input`.
    pub fn longest_match(&self, input: impl AsRef<[u8]>) -> Option<usize> {
        self.munch(input.as_ref()).map(|(len, _)| len)
    }

    /// First offset where an accepted prefix begins, with the end of the
    /// longest one there.
    pub fn find(&self, input: impl AsRef<[u8]>) -> Option<(usize, usize)> {
        let input = input.as_ref();
        (0..=input.len()).find_map(|start| {
            self.munch(&input[start..])
                .map(|(len, _)| (start, start + len))
        })
    }

    /// Maximal munch: longest accepted prefix and its pattern index.
    pub(crate) fn munch(&self, input: &[u8]) -> Option<(usize, usize)> {
        let mut state = self.start();
        let mut last = self.accept_pattern(state).map(|p| (0, p));

        for (i, &byte) in input.iter().enumerate() {
            match self.next_state(state, byte) {
                Some(next) => state = next,
                None => break,
            }
            if let Some(pattern) = self.accept_pattern(state) {
                last = Some((i + 1, pattern));
            }
        }
        last
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            let id = DfaStateId::new(i);
            write!(f, "{}", id)?;
            if let Some(pattern) = self.accept_pattern(id) {
                write!(f, " (accept {})", pattern)?;
            }
            write!(f, " ->")?;

            let mut targets: Vec<DfaStateId> = row.ranges().map(|(_, _, s)| s).collect();
            targets.sort_unstable();
            targets.dedup();
            for target in targets {
                let bytes: Vec<u8> = row
                    .iter()
                    .filter(|&(_, s)| s == target)
                    .map(|(b, _)| b)
                    .collect();
                write!(f, " {}:", target)?;
                write_byte_ranges(f, &bytes)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
