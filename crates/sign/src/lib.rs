//! Digital Signature Schemes
//!
//! This crate implements ECDSA over the STARK curve with StarkEx
//! conventions: field-sized message hashes, x-only public keys and
//! RFC 6979 deterministic nonces.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{
    MessageHash, Nonce, StarkEcdsa, StarkPublicKey, StarkSecretKey, StarkSignature,
};
