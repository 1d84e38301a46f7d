//! Sparse set of NFA states with O(1) insert, membership and clear.
//!
//! Based on: https://research.swtch.com/sparse
//!
//! The NFA simulation keeps its current and next active states in a pair of
//! these, swapping them after every input byte.

use super::arena::StateId;

/// A set of `StateId`s below a fixed capacity, iterated in insertion order.
#[derive(Clone, Debug)]
pub struct SparseSet {
    len: usize,
    /// IDs in insertion order.
    dense: Vec<StateId>,
    /// `sparse[id]` is the position of `id` in `dense` when present.
    sparse: Vec<usize>,
}

impl SparseSet {
    /// Create a new sparse set holding IDs in `[0, capacity)`.
    pub fn new(capacity: usize) -> Self {
        SparseSet {
            len: 0,
            dense: vec![StateId::new(0); capacity],
            sparse: vec![0; capacity],
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.dense.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert an ID. Returns true if it was not already present.
    ///
    /// Panics if the ID is not below the capacity.
    #[inline]
    pub fn insert(&mut self, id: StateId) -> bool {
        if self.contains(id) {
            return false;
        }
        debug_assert!(
            self.len < self.capacity(),
            "SparseSet overflow: len={}, capacity={}",
            self.len,
            self.capacity()
        );
        self.dense[self.len] = id;
        self.sparse[id.index()] = self.len;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, id: StateId) -> bool {
        let idx = self.sparse[id.index()];
        idx < self.len && self.dense[idx] == id
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.dense[..self.len].iter().copied()
    }
}

/// The current/next pair used by the NFA simulation.
#[derive(Clone, Debug)]
pub struct SparseSets {
    pub current: SparseSet,
    pub next: SparseSet,
}

impl SparseSets {
    pub fn new(capacity: usize) -> Self {
        SparseSets {
            current: SparseSet::new(capacity),
            next: SparseSet::new(capacity),
        }
    }

    /// Make `next` the current set and empty the new `next`.
    #[inline]
    pub fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
    }
}
