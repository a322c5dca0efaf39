//! Trait definitions for starksig

pub mod signature;

pub use signature::{Signature, SignatureSerialize};
