use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::errors::AlphabetRangeError;

/// Number of bits used to encode one symbol.
///
/// `BitWidth` is a compact, Copyable representation of the supported
/// alphabet sizes, backed by a single byte (u8). The mapping of variants to
/// integers is stable and used throughout the crate (Base2=1 through
/// Base64=6): the integral value is the number of bits per symbol, and the
/// valid alphabet at a given width is the first `2^bits` entries of the
/// canonical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BitWidth {
    Base2 = 1,
    Base4 = 2,
    Base8 = 3,
    Base16 = 4,
    Base32 = 5,
    Base64 = 6,
}

impl BitWidth {
    /// Convert from a bit count (1-6)
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(Self::Base2),
            2 => Some(Self::Base4),
            3 => Some(Self::Base8),
            4 => Some(Self::Base16),
            5 => Some(Self::Base32),
            6 => Some(Self::Base64),
            _ => None,
        }
    }

    /// Bits per symbol at this width.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Number of valid symbols at this width (`2^bits`).
    #[inline(always)]
    pub const fn alphabet_len(self) -> usize {
        1 << self.bits()
    }

    /// Low-bit mask covering one symbol code at this width.
    #[inline(always)]
    pub const fn mask(self) -> u8 {
        (self.alphabet_len() - 1) as u8
    }

    /// Stable lowercase name of this width.
    #[inline(always)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base2 => "base2",
            Self::Base4 => "base4",
            Self::Base8 => "base8",
            Self::Base16 => "base16",
            Self::Base32 => "base32",
            Self::Base64 => "base64",
        }
    }
}

impl TryFrom<u8> for BitWidth {
    type Error = String;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
            .ok_or_else(|| format!("Unsupported bit width: {bits}. Supported: 1-6 bits per symbol"))
    }
}

impl From<BitWidth> for u8 {
    #[inline(always)]
    fn from(width: BitWidth) -> u8 {
        width.bits()
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BitWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base2" => Ok(Self::Base2),
            "base4" => Ok(Self::Base4),
            "base8" => Ok(Self::Base8),
            "base16" => Ok(Self::Base16),
            "base32" => Ok(Self::Base32),
            "base64" => Ok(Self::Base64),
            _ => Err(format!(
                "Unknown bit width: {s}. Available: base2, base4, base8, base16, base32, base64"
            )),
        }
    }
}

/// The canonical 64-symbol table, code-ordered 0..63.
///
/// Every narrower alphabet is a prefix of this table: the valid alphabet at
/// width `b` is exactly the first `2^b` entries. Base16 here is *not* the
/// hexadecimal digit set; it is the first 16 characters of the larger
/// Base64 ordering.
const CANONICAL_SYMBOLS: [char; 64] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', //
    'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', //
    'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', //
    'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '/',
];

/// Shared, immutable alphabet table.
///
/// The canonical ordered bijection between 6-bit codes (0-63) and printable
/// symbols. Created once at process start; `canonical()` hands out cheap
/// Arc-backed clones so one instance is shared across all codecs.
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    /// Character representation of codes, code-ordered
    symbols: Arc<[char]>,
    /// Mapping from symbol to code for fast reverse lookup
    symbol_to_code: Arc<HashMap<char, u8>>,
}

static CANONICAL: OnceLock<AlphabetTable> = OnceLock::new();

impl AlphabetTable {
    fn new(symbols: impl Into<Vec<char>>) -> Self {
        let symbols: Vec<char> = symbols.into();
        let symbol_to_code = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u8))
            .collect();

        Self {
            symbols: symbols.into(),
            symbol_to_code: Arc::new(symbol_to_code),
        }
    }

    /// The process-wide canonical table (A-Z, a-z, 0-9, '+', '/').
    pub fn canonical() -> Self {
        CANONICAL
            .get_or_init(|| Self::new(CANONICAL_SYMBOLS))
            .clone()
    }

    /// Number of entries in the table (always 64 for the canonical table)
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty (should never be)
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get symbol by code.
    ///
    /// Constant time via direct index. A code below 64 but at or above
    /// `2^b` for some narrower width is still a valid table entry; scoping
    /// to a width is the codec's job, not the table's.
    #[inline]
    pub fn symbol_of(&self, code: u8) -> Result<char, AlphabetRangeError> {
        self.symbols
            .get(code as usize)
            .copied()
            .ok_or(AlphabetRangeError::Code(code))
    }

    /// Get code by symbol. Constant time via the reverse index.
    #[inline]
    pub fn code_of(&self, symbol: char) -> Result<u8, AlphabetRangeError> {
        self.symbol_to_code
            .get(&symbol)
            .copied()
            .ok_or(AlphabetRangeError::Symbol(symbol))
    }

    /// Get all symbols as a code-ordered slice
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Check if a symbol is in the table
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbol_to_code.contains_key(&symbol)
    }
}

impl PartialEq for AlphabetTable {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: check if they point to the same Arc
        Arc::ptr_eq(&self.symbols, &other.symbols) || self.symbols == other.symbols
    }
}

impl Eq for AlphabetTable {}
