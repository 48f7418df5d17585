//! Random hash-string generation.
//!
//! Unrelated scaffolding around the codec: produces fixed-length random
//! strings drawn from a narrow, mostly-readable ASCII range. Nothing in the
//! codec depends on this module.

use std::fmt;

use rand::Rng;

/// Inclusive ASCII byte range the generated strings draw from. Covers
/// digits 1-9, both letter cases, and a handful of punctuation, which keeps
/// the result human-readable.
const HASH_BYTE_RANGE: std::ops::RangeInclusive<u8> = 49..=120;

/// A human-readable hash-like string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashString {
    value: String,
}

impl HashString {
    /// Wrap an existing string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Generate a random hash string of the given length using the
    /// thread-local generator.
    pub fn random(len: usize) -> Self {
        Self::random_with(&mut rand::rng(), len)
    }

    /// Generate a random hash string from a caller-supplied generator, for
    /// seeded/reproducible use.
    pub fn random_with<R: Rng>(rng: &mut R, len: usize) -> Self {
        let value = (0..len)
            .map(|_| rng.random_range(HASH_BYTE_RANGE) as char)
            .collect();
        Self { value }
    }

    /// The underlying string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check if empty
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for HashString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
