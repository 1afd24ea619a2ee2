//! Driver-level error type.

use std::fmt;

use bitstring::bits::error::BitError;

/// Errors produced by the mini-DES driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A bit-level operation failed (width mismatch, bad table entry, ...).
    Bit(BitError),
    /// The master key does not have the configured width.
    BadKeyWidth { expected: usize, actual: usize },
    /// The final block is shorter than the block width and the policy
    /// rejects short blocks.
    ShortFinalBlock { width: usize, block_width: usize },
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::Bit(err) => write!(f, "{err}"),
            CipherError::BadKeyWidth { expected, actual } => {
                write!(f, "master key must be {expected} bits, got {actual}")
            }
            CipherError::ShortFinalBlock { width, block_width } => {
                write!(
                    f,
                    "final block of {width} bits is shorter than the {block_width}-bit block width"
                )
            }
        }
    }
}

impl std::error::Error for CipherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CipherError::Bit(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BitError> for CipherError {
    fn from(err: BitError) -> Self {
        CipherError::Bit(err)
    }
}
