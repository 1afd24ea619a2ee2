//! Text to bit-sequence encoding and block segmentation.

use crate::bits::bit_string::BitString;
use crate::bits::error::BitError;

/// Encodes `text` as one 8-bit MSB-first group per character, concatenated
/// in character order. Code points above 255 do not fit one group and are
/// rejected.
pub fn encode_text(text: &str) -> Result<BitString, BitError> {
    let mut bits = BitString::with_capacity(text.len() * 8);
    for ch in text.chars() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(BitError::UnencodableChar(ch));
        }
        bits.extend_from(&BitString::from_value(code, 8)?);
    }
    Ok(bits)
}

/// Partitions `bits` into consecutive `block_width`-bit chunks, left to
/// right. The final chunk may be shorter than `block_width`; deciding what
/// to do with it is the caller's business.
pub fn segment(bits: &BitString, block_width: usize) -> Vec<BitString> {
    debug_assert!(block_width > 0, "block width must be positive");
    let mut blocks = Vec::with_capacity(bits.len().div_ceil(block_width));
    let mut start = 0;
    while start < bits.len() {
        let end = usize::min(start + block_width, bits.len());
        blocks.push((start..end).map(|i| bits.bit(i)).collect());
        start = end;
    }
    blocks
}
