//! Field, scalar and group arithmetic for the STARK curve
//!
//! This crate provides the arithmetic the STARK ECDSA scheme is built on:
//! the prime field 𝔽ₚ with p = 2²⁵¹ + 17·2¹⁹² + 1, scalars modulo the group
//! order n, and the curve group itself. Everything that touches secret
//! values is constant-time.
//!
//! # Security Features
//!
//! - Scalars are zeroized on drop and redacted in debug output
//! - Complete addition formulas (no exceptional cases to branch on)
//! - Fixed-length Montgomery ladder for scalar multiplication

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{stark, StarkPoint, StarkScalar};

// Hash functions over the STARK field
pub mod hash;
pub use hash::pedersen_hash;
