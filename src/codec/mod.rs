//! Packing codecs built on the base types.
//!
//! [`SymbolCodec`] is the canonical variable-bit-width packer.
//! [`FixedCodec`] is a superseded fixed-length variant kept as an
//! alternative encoding strategy.

mod error;
mod fixed;
mod packed;

pub use error::{
    CorruptSequenceError, FixedEncodeError, InvalidSymbolError, LengthMismatchError,
};
pub use fixed::FixedCodec;
pub use packed::SymbolCodec;
