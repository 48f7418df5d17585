use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::EmptySequenceError;

/// Growable, order-preserving sequence of single bits.
///
/// Append and remove operate only at the tail: stack-like from the
/// consumer's perspective, list-like from the producer's. The sequence
/// imposes no structure of its own; the codec that owns it is responsible
/// for keeping the length a multiple of its symbol width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    /// Create a new empty sequence
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create with capacity (in bits)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Get length in bits
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append a bit at the tail. O(1).
    #[inline]
    pub fn append_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Remove and return the tail bit. O(1).
    #[inline]
    pub fn pop_bit(&mut self) -> Result<bool, EmptySequenceError> {
        self.bits.pop().ok_or(EmptySequenceError)
    }

    /// Get bit at position (insertion order), without removing it
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Iterate over bits in insertion order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl fmt::Display for BitSequence {
    /// Debug rendering: `'0'`/`'1'` characters in insertion order (index 0
    /// first). Diagnostics only; round-tripping goes through the codec.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}
