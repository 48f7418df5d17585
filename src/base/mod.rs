//! Base types for alphabet-packed bit storage.
//!
//! This module provides the foundational types: the canonical symbol table,
//! the supported bit widths, and the growable bit sequence the codec packs
//! into.

mod alphabet;
mod bits;
mod errors;

pub use alphabet::{AlphabetTable, BitWidth};
pub use bits::BitSequence;
pub use errors::{AlphabetRangeError, EmptySequenceError};
