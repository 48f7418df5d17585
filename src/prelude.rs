//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use abits::prelude::*;
//!
//! let codec = SymbolCodec::encode("ABAAAAB", BitWidth::Base2).unwrap();
//! assert_eq!(codec.decode(), "ABAAAAB");
//! ```

pub use crate::base::{
    AlphabetRangeError, AlphabetTable, BitSequence, BitWidth, EmptySequenceError,
};
pub use crate::codec::{
    CorruptSequenceError, FixedCodec, FixedEncodeError, InvalidSymbolError, LengthMismatchError,
    SymbolCodec,
};
pub use crate::hash::HashString;
