//! ECDSA signature implementations
//!
//! This module provides ECDSA over the STARK curve.

pub mod common;
pub mod stark;

// Re-export STARK types
pub use stark::{MessageHash, Nonce, StarkEcdsa, StarkPublicKey, StarkSecretKey, StarkSignature};
