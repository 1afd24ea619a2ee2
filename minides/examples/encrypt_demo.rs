use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bitstring::bits::bit_string::BitString;
use bitstring::bits::cipher_traits::KeySchedule;
use bitstring::bits::codec::encode_text;
use minides::crypto::key_schedule::RotatingKeySchedule;
use minides::crypto::minides::{MiniDes, ShortBlockPolicy};
use minides::crypto::tables::ROUNDS;

fn random_key(rng: &mut StdRng) -> String {
    (0..12)
        .map(|_| if rng.random::<bool>() { '1' } else { '0' })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let master_key = "100101101101";
    let text = "coucou les amis";

    // --------------------------------------------------------
    // 0) Reference run
    // --------------------------------------------------------
    println!("=== Reference run ===");
    let cipher = MiniDes::new(master_key, ShortBlockPolicy::Passthrough)?;
    let plain_bits = encode_text(text)?;
    let cipher_bits = cipher.encrypt(text)?;
    println!(" Plaintext:  {text:?}");
    println!(" Plain bits: {plain_bits}");
    println!(" Ciphertext: {cipher_bits}");

    // --------------------------------------------------------
    // 1) Round-key chain
    // --------------------------------------------------------
    println!("\n=== Round-key chain ===");
    let schedule = RotatingKeySchedule::reference();
    let mut state = BitString::parse(master_key)?;
    for round in 1..=ROUNDS {
        let (next, round_key) = schedule.advance(&state, round)?;
        println!(
            " round {round:2}: shift={} state={} key={}",
            schedule.shift_for_round(round),
            next,
            round_key
        );
        state = next;
    }

    // --------------------------------------------------------
    // 2) Short-block policies
    // --------------------------------------------------------
    println!("\n=== Short-block policies ===");
    for policy in [
        ShortBlockPolicy::Passthrough,
        ShortBlockPolicy::ZeroPad,
        ShortBlockPolicy::Reject,
    ] {
        let cipher = MiniDes::new(master_key, policy)?;
        match cipher.encrypt("c") {
            Ok(bits) => println!(" {policy:?}: {bits}"),
            Err(err) => println!(" {policy:?}: error: {err}"),
        }
    }

    // --------------------------------------------------------
    // 3) Random keys
    // --------------------------------------------------------
    println!("\n=== Random keys ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..4 {
        let key = random_key(&mut rng);
        let cipher = MiniDes::new(&key, ShortBlockPolicy::Passthrough)?;
        println!(" key={} -> {}", key, cipher.encrypt("test")?);
    }

    Ok(())
}
