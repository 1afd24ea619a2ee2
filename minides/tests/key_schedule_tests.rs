use bitstring::bits::bit_string::BitString;
use bitstring::bits::cipher_traits::KeySchedule;
use bitstring::bits::error::BitError;
use minides::crypto::key_schedule::RotatingKeySchedule;
use minides::crypto::tables::ROUNDS;

const MASTER_KEY: &str = "100101101101";

#[test]
fn test_shift_policy() {
    let schedule = RotatingKeySchedule::reference();
    for round in 1..=ROUNDS {
        let expected = if matches!(round, 1 | 2 | 9 | 16) { 1 } else { 2 };
        assert_eq!(schedule.shift_for_round(round), expected);
    }
}

#[test]
fn test_advance_first_round() {
    let schedule = RotatingKeySchedule::reference();
    let master = BitString::parse(MASTER_KEY).unwrap();
    let (state, round_key) = schedule.advance(&master, 1).unwrap();
    assert_eq!(state.to_string(), "001011011011");
    assert_eq!(round_key.to_string(), "100001110111");
}

#[test]
fn test_advance_chain_over_all_rounds() {
    let schedule = RotatingKeySchedule::reference();
    let mut state = BitString::parse(MASTER_KEY).unwrap();
    let mut round_keys = Vec::with_capacity(ROUNDS);
    for round in 1..=ROUNDS {
        let (next, round_key) = schedule.advance(&state, round).unwrap();
        state = next;
        round_keys.push(round_key.to_string());
    }
    assert_eq!(round_keys[1], "110111001001");
    assert_eq!(round_keys[2], "100000111111");
    assert_eq!(round_keys[3], "011110010110");
    assert_eq!(round_keys[8], "011110110100");
    assert_eq!(round_keys[15], "100000111111");
    assert_eq!(state.to_string(), "011001011011");
}

#[test]
fn test_advance_is_pure() {
    let schedule = RotatingKeySchedule::reference();
    let state = BitString::parse("010110110110").unwrap();
    let first = schedule.advance(&state, 5).unwrap();
    let second = schedule.advance(&state, 5).unwrap();
    assert_eq!(first, second);
    // the input state is untouched
    assert_eq!(state.to_string(), "010110110110");
}

#[test]
fn test_advance_rejects_odd_state() {
    let schedule = RotatingKeySchedule::reference();
    let state = BitString::parse("10010110110").unwrap();
    assert_eq!(schedule.advance(&state, 1), Err(BitError::OddLength(11)));
}
