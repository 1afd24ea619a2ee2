pub mod error;
pub mod key_schedule;
pub mod minides;
pub mod round;
pub mod sbox;
pub mod tables;
