use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::{AlphabetTable, BitSequence, BitWidth};

use super::error::{CorruptSequenceError, InvalidSymbolError};

/// One text encoded at a fixed bit width.
///
/// `SymbolCodec` is a value type representing a single encoded message, not
/// an accumulator: it is constructed by validating and encoding an input
/// text (or by adopting an existing bit sequence), and is immutable
/// afterwards. It owns exactly one `BitSequence` of length
/// `symbol_count * width.bits()`.
///
/// The bit order is the load-bearing contract. Encoding reverses the text
/// and appends each symbol's code least-significant-bit first at the tail;
/// decoding repeatedly removes `b` bits from the tail, accumulating the
/// first popped bit as the most significant. The two reversals cancel
/// exactly, so decoding recovers the original, unreversed text. Altering
/// either the append order or the accumulation order breaks round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCodec {
    bits: BitSequence,
    width: BitWidth,
}

impl SymbolCodec {
    /// Encode a text at the given width.
    ///
    /// Every character must be one of the first `2^b` entries of the
    /// canonical table. The resulting bit length is `text chars * b`.
    pub fn encode(text: &str, width: BitWidth) -> Result<Self, InvalidSymbolError> {
        let table = AlphabetTable::canonical();
        let limit = width.alphabet_len();
        let mut bits = BitSequence::with_capacity(text.len() * width.bits() as usize);

        for symbol in text.chars().rev() {
            let code = table
                .code_of(symbol)
                .ok()
                .filter(|&code| (code as usize) < limit)
                .ok_or(InvalidSymbolError { symbol, width })?;

            let code = code & width.mask();
            for i in 0..width.bits() {
                bits.append_bit((code >> i) & 1 == 1);
            }
        }

        Ok(Self { bits, width })
    }

    /// Adopt an existing bit sequence as an encoded message.
    ///
    /// Fails if the sequence length is not a multiple of the symbol width;
    /// this is the point where a corrupt sequence surfaces, so the codecs
    /// handed out by this constructor always decode cleanly.
    pub fn from_bits(bits: BitSequence, width: BitWidth) -> Result<Self, CorruptSequenceError> {
        if bits.len() % width.bits() as usize != 0 {
            return Err(CorruptSequenceError {
                bit_length: bits.len(),
                width,
            });
        }
        Ok(Self { bits, width })
    }

    /// Decode the stored sequence back into the original text.
    ///
    /// Operates on a private copy of the sequence, since the algorithm
    /// destructively pops from the tail. Construction guarantees the length
    /// invariant, so this cannot fail on a constructed codec.
    pub fn decode(&self) -> String {
        let table = AlphabetTable::canonical();
        let width = self.width.bits();
        let mut work = self.bits.clone();
        let count = work.len() / width as usize;
        let mut text = String::with_capacity(count);

        for _ in 0..count {
            let mut code = 0u8;
            for _ in 0..width {
                let bit = work.pop_bit().expect("pop within checked bit length");
                code = (code << 1) | bit as u8;
            }
            // A code assembled from at most 6 bits is always a table entry.
            let symbol = table.symbol_of(code).expect("code within canonical table");
            text.push(symbol);
        }

        text
    }

    /// The canonical textual form; same as [`decode`](Self::decode).
    #[inline]
    pub fn to_text(&self) -> String {
        self.decode()
    }

    /// Length of the stored bit sequence.
    #[inline(always)]
    pub fn bit_length(&self) -> usize {
        self.bits.len()
    }

    /// The configured bit width (bits per symbol, not the symbol count).
    #[inline(always)]
    pub fn symbol_width(&self) -> BitWidth {
        self.width
    }

    /// Number of symbols in the encoded message.
    #[inline(always)]
    pub fn symbol_count(&self) -> usize {
        self.bits.len() / self.width.bits() as usize
    }

    /// Stable textual name of the configured width.
    #[inline]
    pub fn width_name(&self) -> &'static str {
        self.width.name()
    }

    /// Debug rendering of the stored bits in insertion order.
    ///
    /// Diagnostics only; on its own this string is not decode-equivalent.
    pub fn bitstring(&self) -> String {
        self.bits.to_string()
    }

    /// Borrow the stored sequence
    #[inline]
    pub fn bits(&self) -> &BitSequence {
        &self.bits
    }

    /// Consume the codec, yielding the stored sequence
    #[inline]
    pub fn into_bits(self) -> BitSequence {
        self.bits
    }
}

impl fmt::Display for SymbolCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_base2_vector() {
        let codec = SymbolCodec::encode("ABAAAAB", BitWidth::Base2).unwrap();
        assert_eq!(codec.bitstring(), "1000010");
        assert_eq!(codec.decode(), "ABAAAAB");
    }

    #[test]
    fn test_encode_base4_vector() {
        let codec = SymbolCodec::encode("ABCDCBA", BitWidth::Base4).unwrap();
        assert_eq!(codec.bitstring(), "00100111011000");
        assert_eq!(codec.decode(), "ABCDCBA");
    }

    #[test]
    fn test_length_law() {
        let codec = SymbolCodec::encode("ABCDCBA", BitWidth::Base4).unwrap();
        assert_eq!(codec.bit_length(), 7 * 2);
        assert_eq!(codec.symbol_count(), 7);
        assert_eq!(codec.symbol_width(), BitWidth::Base4);
    }

    #[test]
    fn test_encode_empty_text() {
        let codec = SymbolCodec::encode("", BitWidth::Base8).unwrap();
        assert_eq!(codec.bit_length(), 0);
        assert_eq!(codec.symbol_count(), 0);
        assert_eq!(codec.bitstring(), "");
        assert_eq!(codec.decode(), "");
    }

    #[test]
    fn test_encode_invalid_symbol() {
        // 'C' is code 2, outside the 2-entry Base2 alphabet {A, B}
        let result = SymbolCodec::encode("ABC", BitWidth::Base2);
        assert_eq!(
            result.unwrap_err(),
            InvalidSymbolError {
                symbol: 'C',
                width: BitWidth::Base2,
            }
        );
    }

    #[test]
    fn test_encode_symbol_outside_table() {
        let result = SymbolCodec::encode("A!B", BitWidth::Base64);
        assert_eq!(
            result.unwrap_err(),
            InvalidSymbolError {
                symbol: '!',
                width: BitWidth::Base64,
            }
        );
    }

    #[test]
    fn test_from_bits_valid() {
        let encoded = SymbolCodec::encode("QmFzZTY0", BitWidth::Base64).unwrap();
        let adopted = SymbolCodec::from_bits(encoded.bits().clone(), BitWidth::Base64).unwrap();
        assert_eq!(adopted.decode(), "QmFzZTY0");
        assert_eq!(adopted, encoded);
    }

    #[test]
    fn test_from_bits_corrupt_length() {
        let mut bits = BitSequence::new();
        for _ in 0..7 {
            bits.append_bit(true);
        }
        let result = SymbolCodec::from_bits(bits, BitWidth::Base4);
        assert_eq!(
            result.unwrap_err(),
            CorruptSequenceError {
                bit_length: 7,
                width: BitWidth::Base4,
            }
        );
    }

    #[test]
    fn test_from_bits_empty() {
        let codec = SymbolCodec::from_bits(BitSequence::new(), BitWidth::Base32).unwrap();
        assert_eq!(codec.decode(), "");
    }

    #[test]
    fn test_decode_does_not_mutate() {
        let codec = SymbolCodec::encode("xyz", BitWidth::Base64).unwrap();
        let before = codec.bitstring();
        assert_eq!(codec.decode(), "xyz");
        assert_eq!(codec.decode(), "xyz");
        assert_eq!(codec.bitstring(), before);
    }

    #[test]
    fn test_display_is_decoded_text() {
        let codec = SymbolCodec::encode("Hello", BitWidth::Base64).unwrap();
        assert_eq!(format!("{codec}"), "Hello");
        assert_eq!(codec.to_text(), "Hello");
    }

    #[test]
    fn test_width_name() {
        let codec = SymbolCodec::encode("AB", BitWidth::Base2).unwrap();
        assert_eq!(codec.width_name(), "base2");
    }

    #[test]
    fn test_round_trip_all_widths() {
        let table = AlphabetTable::canonical();
        for bits in 1..=6u8 {
            let width = BitWidth::from_bits(bits).unwrap();
            // Text spanning the full alphabet at this width, forwards and
            // backwards, so the reversal cancellation is actually exercised.
            let forward: String = (0..width.alphabet_len() as u8)
                .map(|code| table.symbol_of(code).unwrap())
                .collect();
            let reversed: String = forward.chars().rev().collect();
            let text = format!("{forward}{reversed}");

            let codec = SymbolCodec::encode(&text, width).unwrap();
            assert_eq!(codec.bit_length(), text.len() * bits as usize);
            assert_eq!(codec.decode(), text);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let codec = SymbolCodec::encode("DBCA", BitWidth::Base4).unwrap();
        let json = serde_json::to_string(&codec).unwrap();
        let back: SymbolCodec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, codec);
        assert_eq!(back.decode(), "DBCA");
    }
}
