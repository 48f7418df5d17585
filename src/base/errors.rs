use thiserror::Error;

/// Error returned when a code or symbol falls outside the canonical
/// 64-entry alphabet table.
///
/// Carries the offending value so callers can report exactly what was
/// rejected. This type implements `std::error::Error` and `Display` to
/// provide helpful messages when surfaced to callers or upstream libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetRangeError {
    /// A symbol was not one of the 64 canonical entries.
    #[error("symbol '{0}' is not in the canonical 64-entry alphabet")]
    Symbol(char),

    /// A code was outside the canonical range 0..64.
    #[error("code {0} is outside the canonical code range 0..64")]
    Code(u8),
}

/// Error returned when a pop is attempted on an empty `BitSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pop attempted on an empty bit sequence")]
pub struct EmptySequenceError;
