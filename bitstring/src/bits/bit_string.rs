//! Fixed-order bit sequence with width-checked operations.

use std::fmt;

use bitvec::prelude::BitVec;

use crate::bits::error::BitError;

/// An ordered bit sequence, most-significant bit first: index 0 is the
/// leftmost bit. All table-driven operations address this ordering with
/// 1-based source positions.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bits: BitVec,
}

impl BitString {
    pub fn new() -> Self {
        BitString { bits: BitVec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BitString {
            bits: BitVec::with_capacity(capacity),
        }
    }

    /// A run of `width` zero bits.
    pub fn zeros(width: usize) -> Self {
        BitString {
            bits: BitVec::repeat(false, width),
        }
    }

    /// Parses a `'0'`/`'1'` literal.
    pub fn parse(text: &str) -> Result<Self, BitError> {
        let mut bits = BitVec::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(BitError::InvalidBitChar(ch)),
            }
        }
        Ok(BitString { bits })
    }

    /// Renders `value` MSB-first, left-padded with zeros to exactly `width`
    /// bits.
    pub fn from_value(value: u32, width: usize) -> Result<Self, BitError> {
        let needed = 32 - value.leading_zeros() as usize;
        if needed > width {
            return Err(BitError::WidthOverflow { value, width });
        }
        let mut bits = BitVec::with_capacity(width);
        for shift in (0..width).rev() {
            bits.push(value >> shift & 1 != 0);
        }
        Ok(BitString { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    pub fn concat(&self, other: &BitString) -> BitString {
        let mut bits = self.bits.clone();
        bits.extend_from_bitslice(&other.bits);
        BitString { bits }
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Integer value of the sequence. Caller contract: at most 32 bits wide.
    pub fn value(&self) -> u32 {
        debug_assert!(self.len() <= 32, "value() is limited to 32 bits");
        self.iter().fold(0, |acc, bit| acc << 1 | u32::from(bit))
    }

    /// Splits into equal left and right halves.
    pub fn split_half(&self) -> Result<(BitString, BitString), BitError> {
        if self.len() % 2 != 0 {
            return Err(BitError::OddLength(self.len()));
        }
        let half = self.len() / 2;
        let left = self.bits[..half].to_bitvec();
        let right = self.bits[half..].to_bitvec();
        Ok((BitString { bits: left }, BitString { bits: right }))
    }

    /// Cyclic left rotation by `amount` positions.
    pub fn rotate_left(&self, amount: usize) -> BitString {
        let mut bits = self.bits.clone();
        if !bits.is_empty() {
            let amount = amount % bits.len();
            bits.rotate_left(amount);
        }
        BitString { bits }
    }

    /// Bitwise XOR of two equal-width sequences.
    pub fn xor(&self, other: &BitString) -> Result<BitString, BitError> {
        if self.len() != other.len() {
            return Err(BitError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a != b)
            .collect())
    }

    /// Table-driven bit selection: output position `i` takes the source bit
    /// named by the 1-based entry `table[i]`. Repeating entries expand,
    /// bijective entries permute, subset entries contract.
    pub fn select(&self, table: &[usize]) -> Result<BitString, BitError> {
        let mut bits = BitVec::with_capacity(table.len());
        for &entry in table {
            if entry == 0 || entry > self.len() {
                return Err(BitError::IndexOutOfRange {
                    entry,
                    width: self.len(),
                });
            }
            bits.push(self.bits[entry - 1]);
        }
        Ok(BitString { bits })
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitString {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(\"{self}\")")
    }
}
