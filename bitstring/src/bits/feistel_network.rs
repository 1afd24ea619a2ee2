use std::sync::Arc;

use crate::bits::bit_string::BitString;
use crate::bits::cipher_traits::{KeySchedule, RoundFunction};
use crate::bits::error::BitError;

/// Feistel network over bit-string blocks, parameterized by a key schedule
/// and a round function.
///
/// The key chain restarts from the master key on every block, so identical
/// plaintext blocks encrypt identically (no chaining mode).
pub struct FeistelNetwork {
    rounds: usize,
    key_schedule: Arc<dyn KeySchedule + Send + Sync>,
    round_function: Arc<dyn RoundFunction + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        rounds: usize,
        key_schedule: Arc<dyn KeySchedule + Send + Sync>,
        round_function: Arc<dyn RoundFunction + Send + Sync>,
    ) -> Self {
        FeistelNetwork {
            rounds,
            key_schedule,
            round_function,
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Runs one block through all rounds. Rounds are 1-based: round `i`'s
    /// output is round `i + 1`'s input.
    pub fn encrypt_block(
        &self,
        block: &BitString,
        master_key: &BitString,
    ) -> Result<BitString, BitError> {
        let mut block = block.clone();
        let mut state = master_key.clone();
        for round in 1..=self.rounds {
            let (next_state, round_key) = self.key_schedule.advance(&state, round)?;
            block = self.round_function.transform(&block, &round_key)?;
            state = next_state;
        }
        Ok(block)
    }
}
