//! One Feistel round: expansion, key mix, substitution, permutation, swap.

use bitstring::bits::bit_string::BitString;
use bitstring::bits::cipher_traits::RoundFunction;
use bitstring::bits::error::BitError;

use crate::crypto::sbox::substitute;
use crate::crypto::tables::{EXPANSION, PERMUTATION, SBOX_A, SBOX_B};

/// Substitution-permutation round function over the right half of a block.
pub struct SpnRound {
    expansion: Vec<usize>,
    permutation: Vec<usize>,
    sbox_a: [[u8; 16]; 4],
    sbox_b: [[u8; 16]; 4],
}

impl SpnRound {
    pub fn new(
        expansion: Vec<usize>,
        permutation: Vec<usize>,
        sbox_a: [[u8; 16]; 4],
        sbox_b: [[u8; 16]; 4],
    ) -> Self {
        SpnRound {
            expansion,
            permutation,
            sbox_a,
            sbox_b,
        }
    }

    pub fn reference() -> Self {
        Self::new(EXPANSION.to_vec(), PERMUTATION.to_vec(), SBOX_A, SBOX_B)
    }
}

impl RoundFunction for SpnRound {
    /// The pre-expansion right half becomes the new left half; the new right
    /// half is `permute(substitute(expand(right) ^ round_key)) ^ left`.
    fn transform(&self, block: &BitString, round_key: &BitString) -> Result<BitString, BitError> {
        let (left, right) = block.split_half()?;
        let expanded = right.select(&self.expansion)?;
        let masked = expanded.xor(round_key)?;
        let substituted = substitute(&masked, &self.sbox_a, &self.sbox_b)?;
        let permuted = substituted.select(&self.permutation)?;
        let new_right = permuted.xor(&left)?;
        Ok(right.concat(&new_right))
    }
}
