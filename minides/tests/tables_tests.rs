use minides::crypto::tables::{
    BLOCK_WIDTH, EXPANSION, KEY_SELECTION, KEY_WIDTH, PERMUTATION, SBOX_A, SBOX_B,
};

#[test]
fn test_expansion_entries_stay_inside_the_half_block() {
    let half = BLOCK_WIDTH / 2;
    assert!(EXPANSION.iter().all(|&entry| entry >= 1 && entry <= half));
    // expansion fans the 8-bit half out to the 12-bit round-key width
    assert_eq!(EXPANSION.len(), KEY_WIDTH);
}

#[test]
fn test_permutation_is_a_bijection() {
    let mut sorted = PERMUTATION;
    sorted.sort_unstable();
    let expected: Vec<usize> = (1..=PERMUTATION.len()).collect();
    assert_eq!(sorted.to_vec(), expected);
}

#[test]
fn test_key_selection_entries_stay_inside_the_chain_state() {
    assert_eq!(KEY_SELECTION.len(), KEY_WIDTH);
    assert!(
        KEY_SELECTION
            .iter()
            .all(|&entry| entry >= 1 && entry <= KEY_WIDTH)
    );
}

#[test]
fn test_sbox_shapes() {
    for sbox in [&SBOX_A, &SBOX_B] {
        assert_eq!(sbox.len(), 4);
        for row in sbox.iter() {
            assert_eq!(row.len(), 16);
            assert!(row.iter().all(|&value| value <= 15));
        }
    }
}
