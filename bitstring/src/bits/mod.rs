pub mod bit_string;
pub mod cipher_traits;
pub mod codec;
pub mod error;
pub mod feistel_network;
