//! abits: packing text from power-of-two symbol alphabets into
//! minimal-width bit sequences.
//!
//! The crate represents alphabets of size 2, 4, 8, 16, 32 and 64, every one
//! a prefix of a single canonical 64-symbol table (Base16 here is the first
//! 16 characters of the Base64 ordering, not the hexadecimal digit set).
//! Text over such an alphabet is stored using the minimum number of bits
//! per symbol, with no compression, and reconstructed losslessly.

pub mod base;
pub mod codec;
pub mod hash;

pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use. Re-exporting them here makes them available as
// `abits::SymbolCodec`, `abits::BitWidth`, etc.
pub use base::{AlphabetTable, BitSequence, BitWidth};
pub use codec::SymbolCodec;
