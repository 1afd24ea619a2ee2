use crate::bits::bit_string::BitString;
use crate::bits::error::BitError;

/// One Feistel round over a whole block.
pub trait RoundFunction {
    fn transform(&self, block: &BitString, round_key: &BitString) -> Result<BitString, BitError>;
}

/// Per-round key derivation with explicit chain state.
///
/// `advance` is a pure function of `(state, round)`: it returns the next
/// chain state together with the operational key for this round, never
/// mutating hidden state.
pub trait KeySchedule {
    fn advance(&self, state: &BitString, round: usize)
    -> Result<(BitString, BitString), BitError>;
}
