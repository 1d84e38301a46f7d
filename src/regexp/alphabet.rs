//! The pattern alphabet: byte values 1..=255.
//!
//! Byte 0 is a sentinel and never belongs to any predicate, including
//! inverted ones.

use std::fmt;

use bitvec::array::BitArray;

/// Smallest byte in the alphabet.
pub const ALPHABET_MIN: u8 = 1;
/// Largest byte in the alphabet.
pub const ALPHABET_MAX: u8 = u8::MAX;

/// A total function from the alphabet to true/false, one bit per byte.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct CharPredicate {
    bits: BitArray<[u64; 4]>,
}

impl CharPredicate {
    /// The predicate that is false everywhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// True for every byte in the alphabet.
    pub fn full() -> Self {
        let mut p = Self::new();
        p.insert_range(ALPHABET_MIN, ALPHABET_MAX);
        p
    }

    pub fn digits() -> Self {
        let mut p = Self::new();
        p.insert_range(b'0', b'9');
        p
    }

    pub fn single(byte: u8) -> Self {
        let mut p = Self::new();
        p.insert(byte);
        p
    }

    #[inline]
    pub fn insert(&mut self, byte: u8) {
        if byte >= ALPHABET_MIN {
            self.bits.set(byte as usize, true);
        }
    }

    /// Set every byte in `lo..=hi`. A reversed range sets nothing.
    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        for byte in lo..=hi {
            self.insert(byte);
        }
    }

    #[inline]
    pub fn remove(&mut self, byte: u8) {
        self.bits.set(byte as usize, false);
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.bits[byte as usize]
    }

    /// Flip every byte of the alphabet in place.
    pub fn invert(&mut self) {
        self.bits = !self.bits;
        self.remove(0);
    }

    #[must_use]
    pub fn inverted(mut self) -> Self {
        self.invert();
        self
    }

    pub fn union_with(&mut self, other: &CharPredicate) {
        for byte in other.bits.iter_ones() {
            self.bits.set(byte, true);
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Matching bytes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter_ones().map(|i| i as u8)
    }
}

impl fmt::Debug for CharPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|b| b.escape_ascii().to_string()))
            .finish()
    }
}
