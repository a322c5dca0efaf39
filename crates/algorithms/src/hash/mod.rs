//! Hash functions over the STARK field
//!
//! Only the StarkEx Pedersen hash lives here; byte-oriented digests such as
//! the SHA-256 used for nonce derivation come from RustCrypto.

pub mod pedersen;

pub use pedersen::{pedersen_hash, pedersen_hash_bytes};
