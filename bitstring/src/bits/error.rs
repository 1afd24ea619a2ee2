//! Error type for bit-string operations.

use std::fmt;

/// Errors produced by bit-string operations.
///
/// Table and width problems are configuration bugs, detected at the point
/// of use rather than pre-validated: tables are fixed data supplied once
/// at setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// A character other than `'0'` or `'1'` appeared in a bit-string literal.
    InvalidBitChar(char),
    /// A value does not fit in the requested bit width.
    WidthOverflow { value: u32, width: usize },
    /// A sequence of odd width cannot be split into equal halves.
    OddLength(usize),
    /// XOR operands must have equal widths.
    LengthMismatch { left: usize, right: usize },
    /// A table entry names a source position outside the input sequence.
    IndexOutOfRange { entry: usize, width: usize },
    /// A substitution vector does not have the required width.
    BadVectorWidth { expected: usize, actual: usize },
    /// A character's code point does not fit in one 8-bit group.
    UnencodableChar(char),
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitError::InvalidBitChar(ch) => {
                write!(f, "invalid bit character {ch:?}, expected '0' or '1'")
            }
            BitError::WidthOverflow { value, width } => {
                write!(f, "value {value} does not fit in {width} bits")
            }
            BitError::OddLength(len) => {
                write!(f, "sequence of width {len} cannot be split into halves")
            }
            BitError::LengthMismatch { left, right } => {
                write!(f, "width mismatch: {left} bits vs {right} bits")
            }
            BitError::IndexOutOfRange { entry, width } => {
                write!(
                    f,
                    "table entry {entry} is outside the 1..={width} source range"
                )
            }
            BitError::BadVectorWidth { expected, actual } => {
                write!(f, "expected a {expected}-bit vector, got {actual} bits")
            }
            BitError::UnencodableChar(ch) => {
                write!(f, "character {ch:?} is outside the 8-bit code-point range")
            }
        }
    }
}

impl std::error::Error for BitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_length_mismatch() {
        let err = BitError::LengthMismatch { left: 12, right: 8 };
        assert_eq!(format!("{}", err), "width mismatch: 12 bits vs 8 bits");
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = BitError::IndexOutOfRange { entry: 9, width: 8 };
        assert_eq!(
            format!("{}", err),
            "table entry 9 is outside the 1..=8 source range"
        );
    }
}
