//! The mini-DES driver: text encoding, block segmentation, 16-round Feistel
//! encryption per block, concatenation.

use std::sync::Arc;

use rayon::prelude::*;

use bitstring::bits::bit_string::BitString;
use bitstring::bits::codec::{encode_text, segment};
use bitstring::bits::feistel_network::FeistelNetwork;

use crate::crypto::error::CipherError;
use crate::crypto::key_schedule::RotatingKeySchedule;
use crate::crypto::round::SpnRound;
use crate::crypto::tables::{BLOCK_WIDTH, KEY_WIDTH, ROUNDS};

/// Block count above which blocks are encrypted in parallel. Blocks are
/// independent (each restarts the key chain from the master key), so only
/// the output order has to be preserved.
const PARALLEL_BLOCK_THRESHOLD: usize = 64;

/// What to do with a final block shorter than the block width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortBlockPolicy {
    /// Emit the short block's bits unmodified. Output width always equals
    /// input width.
    Passthrough,
    /// Right-pad the short block with zero bits to the block width and
    /// encrypt it. Output width rounds up to the block boundary.
    ZeroPad,
    /// Fail with [`CipherError::ShortFinalBlock`].
    Reject,
}

/// Mini-DES over 16-bit blocks with a 12-bit master key.
pub struct MiniDes {
    network: FeistelNetwork,
    master_key: BitString,
    block_width: usize,
    short_block: ShortBlockPolicy,
}

impl MiniDes {
    /// Builds the reference configuration around a 12-bit `'0'`/`'1'`
    /// master key literal.
    pub fn new(master_key: &str, short_block: ShortBlockPolicy) -> Result<Self, CipherError> {
        let master_key = BitString::parse(master_key)?;
        if master_key.len() != KEY_WIDTH {
            return Err(CipherError::BadKeyWidth {
                expected: KEY_WIDTH,
                actual: master_key.len(),
            });
        }
        let network = FeistelNetwork::new(
            ROUNDS,
            Arc::new(RotatingKeySchedule::reference()),
            Arc::new(SpnRound::reference()),
        );
        Ok(MiniDes {
            network,
            master_key,
            block_width: BLOCK_WIDTH,
            short_block,
        })
    }

    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// Encrypts `text` and renders the result as a `'0'`/`'1'` string.
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.encrypt_bits(text)?.to_string())
    }

    /// Encrypts `text`: one 8-bit group per character, segmented into
    /// 16-bit blocks, each block run through the 16-round network with the
    /// key chain reset to the master key. Blocks keep their input order in
    /// the output.
    pub fn encrypt_bits(&self, text: &str) -> Result<BitString, CipherError> {
        let bits = encode_text(text)?;
        let mut blocks = segment(&bits, self.block_width);

        let tail = match blocks.last() {
            Some(block) if block.len() < self.block_width => blocks.pop(),
            _ => None,
        };

        let encrypted: Vec<BitString> = if blocks.len() >= PARALLEL_BLOCK_THRESHOLD {
            blocks
                .par_iter()
                .map(|block| self.network.encrypt_block(block, &self.master_key))
                .collect::<Result<_, _>>()?
        } else {
            blocks
                .iter()
                .map(|block| self.network.encrypt_block(block, &self.master_key))
                .collect::<Result<_, _>>()?
        };

        let mut out = BitString::with_capacity(bits.len());
        for block in &encrypted {
            out.extend_from(block);
        }

        if let Some(short) = tail {
            match self.short_block {
                ShortBlockPolicy::Passthrough => out.extend_from(&short),
                ShortBlockPolicy::ZeroPad => {
                    let padded = short.concat(&BitString::zeros(self.block_width - short.len()));
                    let encrypted = self.network.encrypt_block(&padded, &self.master_key)?;
                    out.extend_from(&encrypted);
                }
                ShortBlockPolicy::Reject => {
                    return Err(CipherError::ShortFinalBlock {
                        width: short.len(),
                        block_width: self.block_width,
                    });
                }
            }
        }

        Ok(out)
    }
}
