//! Traditional signature schemes
//!
//! This module contains the elliptic-curve signature schemes.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{MessageHash, Nonce, StarkEcdsa, StarkPublicKey, StarkSecretKey, StarkSignature};
