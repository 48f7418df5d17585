use thiserror::Error;

use crate::base::BitWidth;

/// Error returned when an input character is not in the alphabet implied by
/// the codec's bit width, i.e. not among the first `2^b` entries of the
/// canonical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("symbol '{symbol}' is not in the {width} alphabet ({} entries)", .width.alphabet_len())]
pub struct InvalidSymbolError {
    /// The character that was rejected
    pub symbol: char,
    /// The width whose alphabet excludes it
    pub width: BitWidth,
}

/// Error returned when a bit sequence's length is not a multiple of the
/// symbol width at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit length {bit_length} is not a multiple of {width} symbol width ({} bits)", .width.bits())]
pub struct CorruptSequenceError {
    /// The offending bit length
    pub bit_length: usize,
    /// The width the sequence was decoded at
    pub width: BitWidth,
}

/// Error returned by the fixed-width variant when the input text length
/// does not equal the compile-time-fixed symbol count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("text length {actual} does not match the fixed symbol count {expected}")]
pub struct LengthMismatchError {
    /// The compile-time symbol count
    pub expected: usize,
    /// The supplied text length
    pub actual: usize,
}

/// Error type for fixed-width encoding, which can fail on either the text
/// length or an out-of-alphabet symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FixedEncodeError {
    #[error(transparent)]
    LengthMismatch(#[from] LengthMismatchError),
    #[error(transparent)]
    InvalidSymbol(#[from] InvalidSymbolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_display() {
        let err = InvalidSymbolError {
            symbol: 'C',
            width: BitWidth::Base2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains('C'));
        assert!(msg.contains("base2"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_corrupt_sequence_display() {
        let err = CorruptSequenceError {
            bit_length: 7,
            width: BitWidth::Base4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains('7'));
        assert!(msg.contains("base4"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = LengthMismatchError {
            expected: 8,
            actual: 5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains('8'));
        assert!(msg.contains('5'));
    }
}
