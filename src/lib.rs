//! # starksig
//!
//! ECDSA over the STARK curve, with the conventions used by StarkEx and
//! StarkNet signatures.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! starksig = "0.3"
//! ```
//!
//! ```
//! use starksig::sign::traditional::ecdsa::stark;
//!
//! let private_key = [0x12];
//! let msg_hash = [0x01, 0x23, 0x45];
//!
//! let public_key = stark::get_public_key(&private_key)?;
//! let (r, s) = stark::sign(&private_key, &msg_hash, None)?;
//! assert!(stark::verify(&public_key, &msg_hash, &r, &s)?);
//! # Ok::<(), starksig::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `sign` (default): the signature scheme
//! - `rand`: re-export `rand` for use with `StarkEcdsa::sign_with_rng`
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`starksig-api`]: error type and signature traits
//! - [`starksig-params`]: curve constants
//! - [`starksig-algorithms`]: field, scalar and group arithmetic on the STARK curve
//! - [`starksig-sign`]: ECDSA sign, verify and public key derivation

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use starksig_algorithms as algorithms;
pub use starksig_api as api;
pub use starksig_internal as internal;
pub use starksig_params as params;

// Crates that appear in public signatures
pub use subtle;
pub use zeroize;
#[cfg(feature = "rand")]
pub use rand;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use starksig_sign as sign;

/// Common imports for starksig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureSerialize};

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        MessageHash, Nonce, StarkEcdsa, StarkPublicKey, StarkSecretKey, StarkSignature,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::traditional::ecdsa::stark::message::{
        get_limit_order_msg_hash, get_transfer_msg_hash, LimitOrderMsg, TransferMsg,
    };
}
