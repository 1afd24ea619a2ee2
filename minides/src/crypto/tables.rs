//! Reference configuration: table data fixed for the lifetime of a cipher
//! run.

/// Block width in bits; blocks split into two 8-bit halves.
pub const BLOCK_WIDTH: usize = 16;
/// Master key and key-chain width in bits.
pub const KEY_WIDTH: usize = 12;
/// Feistel rounds per block.
pub const ROUNDS: usize = 16;

/// Expansion of the 8-bit right half to 12 bits (entries repeat).
pub const EXPANSION: [usize; 12] = [8, 1, 2, 3, 4, 5, 4, 5, 6, 7, 8, 1];

/// Bijective permutation of the 8-bit substitution output.
pub const PERMUTATION: [usize; 8] = [2, 8, 4, 7, 6, 5, 3, 1];

/// Selection of the 12-bit round key from the 12-bit chain state.
pub const KEY_SELECTION: [usize; 12] = [8, 7, 1, 4, 10, 5, 3, 9, 2, 12, 6, 11];

/// Rounds whose key-half rotation is 1 position; every other round rotates
/// by 2.
pub const SINGLE_SHIFT_ROUNDS: [usize; 4] = [1, 2, 9, 16];

/// S-box for the first 6-bit vector of a masked half.
pub const SBOX_A: [[u8; 16]; 4] = [
    [14, 4, 13, 1, 2, 15, 11, 8, 3, 10, 6, 12, 5, 9, 0, 7],
    [0, 15, 7, 4, 14, 2, 13, 1, 10, 6, 12, 11, 9, 5, 3, 8],
    [4, 1, 14, 8, 13, 6, 2, 11, 15, 12, 9, 7, 3, 10, 5, 0],
    [15, 12, 8, 2, 4, 9, 1, 7, 5, 11, 3, 14, 10, 0, 6, 13],
];

/// S-box for the second 6-bit vector of a masked half.
pub const SBOX_B: [[u8; 16]; 4] = [
    [15, 1, 8, 14, 6, 11, 3, 4, 9, 7, 2, 13, 12, 0, 5, 10],
    [3, 13, 4, 7, 15, 2, 8, 14, 12, 0, 1, 10, 6, 9, 11, 5],
    [0, 14, 7, 11, 10, 4, 13, 1, 5, 8, 12, 6, 9, 3, 2, 15],
    [13, 8, 10, 1, 3, 15, 4, 2, 11, 6, 7, 12, 0, 5, 14, 9],
];
