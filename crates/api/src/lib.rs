//! Public API traits and error types for the starksig library
//!
//! This crate provides the public API surface shared by the starksig crates:
//! the error taxonomy every operation reports through, and the generic
//! signature traits the STARK ECDSA scheme implements.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{Signature, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::signature;
