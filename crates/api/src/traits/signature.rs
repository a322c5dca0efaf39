//! Digital signature traits for starksig
//!
//! This module defines the traits that signature schemes implement.
//! The design prioritizes security by not requiring mutable access to secret keys.

use crate::Result;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// This trait defines the minimal interface that signature algorithms
/// implement. It intentionally does not require `AsRef` or `AsMut`
/// implementations for secret keys to prevent accidental key corruption.
///
/// The message passed to [`Signature::sign`] and [`Signature::verify`] is the
/// encoded message hash the scheme signs. Schemes that sign a field-sized
/// digest define how those bytes are interpreted and reject anything outside
/// their digest range.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    ///
    /// Must not leak information about the secret key through timing.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// Returns `Ok(())` only when the signature is valid.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}

/// Byte encodings for signature keys and signature data
pub trait SignatureSerialize: Signature {
    /// Size of an encoded public key in bytes
    const PUBLIC_KEY_SIZE: usize;

    /// Size of an encoded secret key in bytes
    const SECRET_KEY_SIZE: usize;

    /// Size of an encoded signature in bytes
    const SIGNATURE_SIZE: usize;

    /// Serialize a public key to bytes
    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8>;

    /// Deserialize a public key from bytes
    fn deserialize_public_key(bytes: &[u8]) -> Result<Self::PublicKey>;

    /// Serialize a secret key to bytes
    ///
    /// The returned buffer holds key material and should be zeroized by the caller.
    fn serialize_secret_key(key: &Self::SecretKey) -> Vec<u8>;

    /// Deserialize a secret key from bytes
    fn deserialize_secret_key(bytes: &[u8]) -> Result<Self::SecretKey>;

    /// Serialize a signature to bytes
    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8>;

    /// Deserialize a signature from bytes
    fn deserialize_signature(bytes: &[u8]) -> Result<Self::SignatureData>;
}
