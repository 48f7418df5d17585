use std::fmt;

use crate::base::{AlphabetTable, BitSequence, BitWidth};

use super::error::{FixedEncodeError, InvalidSymbolError, LengthMismatchError};

/// Fixed-width variant of the packer: the symbol count is a compile-time
/// constant.
///
/// Superseded by [`SymbolCodec`](super::SymbolCodec) and retained as a
/// historical alternative encoding strategy. The input text must contain
/// exactly `N` symbols; anything else is rejected up front with
/// [`LengthMismatchError`]. The bit-order contract is the same as the
/// growable codec's, so `to_bits()` produces an identical wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCodec<const N: usize> {
    /// Symbol codes in text order
    codes: [u8; N],
    width: BitWidth,
}

impl<const N: usize> FixedCodec<N> {
    /// Encode a text of exactly `N` symbols at the given width.
    pub fn encode(text: &str, width: BitWidth) -> Result<Self, FixedEncodeError> {
        let actual = text.chars().count();
        if actual != N {
            return Err(LengthMismatchError {
                expected: N,
                actual,
            }
            .into());
        }

        let table = AlphabetTable::canonical();
        let limit = width.alphabet_len();
        let mut codes = [0u8; N];
        for (slot, symbol) in codes.iter_mut().zip(text.chars()) {
            *slot = table
                .code_of(symbol)
                .ok()
                .filter(|&code| (code as usize) < limit)
                .ok_or(InvalidSymbolError { symbol, width })?;
        }

        Ok(Self { codes, width })
    }

    /// Decode back into the original text.
    pub fn decode(&self) -> String {
        let table = AlphabetTable::canonical();
        self.codes
            .iter()
            .map(|&code| table.symbol_of(code).expect("code within canonical table"))
            .collect()
    }

    /// Render the message as a bit sequence in the packer's wire order:
    /// text reversed, each code appended least-significant-bit first.
    pub fn to_bits(&self) -> BitSequence {
        let mut bits = BitSequence::with_capacity(N * self.width.bits() as usize);
        for &code in self.codes.iter().rev() {
            let code = code & self.width.mask();
            for i in 0..self.width.bits() {
                bits.append_bit((code >> i) & 1 == 1);
            }
        }
        bits
    }

    /// Debug rendering of the bits in insertion order
    pub fn bitstring(&self) -> String {
        self.to_bits().to_string()
    }

    /// Total bit length of the rendered message.
    #[inline(always)]
    pub fn bit_length(&self) -> usize {
        N * self.width.bits() as usize
    }

    /// The configured bit width.
    #[inline(always)]
    pub fn symbol_width(&self) -> BitWidth {
        self.width
    }

    /// The compile-time symbol count.
    #[inline(always)]
    pub fn symbol_count(&self) -> usize {
        N
    }
}

impl<const N: usize> fmt::Display for FixedCodec<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}
