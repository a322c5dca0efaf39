//! ECDSA over the STARK curve
//!
//! Signatures follow the StarkEx conventions:
//!
//! - the signed message is a field-sized hash `h < 2²⁵¹`, used as-is
//!   (no hashing or truncation inside the scheme);
//! - `r`, `s` and `w = s⁻¹ mod n` all lie in `[1, 2²⁵¹)`;
//! - a public key is identified by its x-coordinate alone, so verification
//!   accepts `(u₁·G + u₂·Q)` as well as `(u₁·G − u₂·Q)`;
//! - nonces are derived deterministically per RFC 6979 unless the caller
//!   supplies one.
//!
//! Two entry layers are provided. The typed layer ([`StarkEcdsa`] with
//! [`StarkSecretKey`], [`StarkPublicKey`], [`MessageHash`], [`Nonce`] and
//! [`StarkSignature`]) validates every input once, at construction. The
//! integer layer ([`get_public_key`], [`sign`], [`verify`]) takes big-endian
//! byte strings of any width and maps each malformed input to its own
//! error kind.
//!
//! [`message`] builds the StarkEx transfer and limit order hashes that
//! are signed in practice.

pub mod message;
mod rfc6979;

use crate::traditional::ecdsa::common::{
    below_element_bound, int_to_fixed, SignatureComponents, INT_SIZE,
};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;
use rand::{CryptoRng, RngCore};
use starksig_algorithms::ec::stark as ec;
use starksig_api::{
    error::Error as ApiError, Result as ApiResult, ResultExt, Signature as SignatureTrait,
    SignatureSerialize,
};
use starksig_internal::constant_time::{ct_eq, ct_eq_choice, ct_is_zero};
use starksig_params::traditional::ecdsa::{
    STARK_PRIVATE_KEY_SIZE, STARK_PUBLIC_KEY_SIZE, STARK_SIGNATURE_SIZE,
};
use subtle::Choice;
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

/// ECDSA signature scheme over the STARK curve
pub struct StarkEcdsa;

/// STARK private key
///
/// The scalar d must satisfy 1 ≤ d ≤ n-1 where n is the order of the
/// base point G. Wiped on drop.
#[derive(Clone)]
pub struct StarkSecretKey {
    raw: ec::Scalar,
}

/// STARK public key Q = d·G
///
/// Always on the curve and never the identity. Two keys compare equal when
/// their x-coordinates match, since the x-coordinate is the key's identity.
#[derive(Clone, Copy, Debug)]
pub struct StarkPublicKey {
    point: ec::Point,
}

/// Message hash to be signed, an integer in [0, 2²⁵¹)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageHash([u8; INT_SIZE]);

/// Caller-supplied signing nonce k ∈ [1, n-1]
#[derive(Clone)]
pub struct Nonce {
    raw: ec::Scalar,
}

/// STARK signature (r, s) with both components in [1, 2²⁵¹)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarkSignature {
    r: [u8; INT_SIZE],
    s: [u8; INT_SIZE],
}

impl StarkSecretKey {
    /// Parse a private key from a big-endian integer of any width
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let fixed = Zeroizing::new(int_to_fixed(bytes).ok_or(ApiError::InvalidPrivateKey {
            context: "private key wider than 256 bits",
        })?);
        let raw = ec::Scalar::new(*fixed).wrap_err(|| ApiError::InvalidPrivateKey {
            context: "private key must be in [1, n-1]",
        })?;
        Ok(Self { raw })
    }

    /// Big-endian encoding of the private scalar
    pub fn to_bytes(&self) -> Zeroizing<[u8; STARK_PRIVATE_KEY_SIZE]> {
        Zeroizing::new(self.raw.serialize())
    }
}

impl Zeroize for StarkSecretKey {
    fn zeroize(&mut self) {
        self.raw.zeroize();
    }
}

impl fmt::Debug for StarkSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StarkSecretKey([REDACTED])")
    }
}

impl StarkPublicKey {
    /// Build a public key from its x-coordinate
    ///
    /// This is the scheme's native public key format. The even root is
    /// picked for y; verification is insensitive to the choice.
    pub fn from_x(x: &[u8]) -> ApiResult<Self> {
        let fixed = int_to_fixed(x).ok_or(ApiError::InvalidPublicKey {
            context: "public key wider than 256 bits",
        })?;
        let point = ec::Point::from_x(&fixed, false).wrap_err(|| ApiError::InvalidPublicKey {
            context: "x is not the abscissa of a curve point",
        })?;
        Ok(Self { point })
    }

    /// Build a public key from affine coordinates
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> ApiResult<Self> {
        let invalid = || ApiError::InvalidPublicKey {
            context: "point is not on the curve",
        };
        let x = int_to_fixed(x).ok_or_else(invalid)?;
        let y = int_to_fixed(y).ok_or_else(invalid)?;
        let point = ec::Point::new_uncompressed(&x, &y).wrap_err(invalid)?;
        Ok(Self { point })
    }

    /// Parse a SEC1 encoding (compressed or uncompressed)
    pub fn from_sec1(bytes: &[u8]) -> ApiResult<Self> {
        let format = ec::Point::detect_format(bytes).wrap_err(|| ApiError::InvalidPublicKey {
            context: "malformed point encoding",
        })?;
        let point = match format {
            ec::PointFormat::Identity => {
                return Err(ApiError::InvalidPublicKey {
                    context: "public key is the point at infinity",
                })
            }
            ec::PointFormat::Uncompressed => ec::Point::deserialize_uncompressed(bytes),
            ec::PointFormat::Compressed => ec::Point::deserialize_compressed(bytes),
        }
        .wrap_err(|| ApiError::InvalidPublicKey {
            context: "point is not on the curve",
        })?;
        Self::from_point(point)
    }

    /// Wrap a curve point, rejecting the identity
    pub fn from_point(point: ec::Point) -> ApiResult<Self> {
        if point.is_identity() {
            return Err(ApiError::InvalidPublicKey {
                context: "public key is the point at infinity",
            });
        }
        Ok(Self { point })
    }

    /// The x-coordinate, big-endian
    pub fn x_bytes(&self) -> [u8; STARK_PUBLIC_KEY_SIZE] {
        self.point.x_coordinate_bytes()
    }

    /// The y-coordinate, big-endian
    pub fn y_bytes(&self) -> [u8; STARK_PUBLIC_KEY_SIZE] {
        self.point.y_coordinate_bytes()
    }

    /// SEC1 uncompressed encoding 0x04 ∥ x ∥ y
    pub fn to_uncompressed(&self) -> [u8; ec::STARK_POINT_UNCOMPRESSED_SIZE] {
        self.point.serialize_uncompressed()
    }

    /// SEC1 compressed encoding 0x02/0x03 ∥ x
    pub fn to_compressed(&self) -> [u8; ec::STARK_POINT_COMPRESSED_SIZE] {
        self.point.serialize_compressed()
    }

    /// The underlying curve point
    pub fn point(&self) -> &ec::Point {
        &self.point
    }
}

impl PartialEq for StarkPublicKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.x_bytes(), other.x_bytes())
    }
}

impl Eq for StarkPublicKey {}

impl MessageHash {
    /// Parse a message hash from a big-endian integer of any width
    ///
    /// Values of 2²⁵¹ or more are rejected, never truncated.
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let fixed = int_to_fixed(bytes).ok_or(ApiError::InvalidMessageHash {
            context: "message hash wider than 256 bits",
        })?;
        if !below_element_bound(&fixed) {
            return Err(ApiError::InvalidMessageHash {
                context: "message hash must be below 2^251",
            });
        }
        Ok(Self(fixed))
    }

    /// The hash as a 32-byte big-endian integer
    pub fn as_bytes(&self) -> &[u8; INT_SIZE] {
        &self.0
    }

    fn to_scalar(&self) -> ec::Scalar {
        // h < 2^251 < n, so this never wraps
        ec::Scalar::reduce(&self.0)
    }
}

impl Nonce {
    /// Parse a nonce from a big-endian integer of any width
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let fixed = Zeroizing::new(int_to_fixed(bytes).ok_or(ApiError::InvalidNonce {
            context: "nonce wider than 256 bits",
        })?);
        let raw = ec::Scalar::new(*fixed).wrap_err(|| ApiError::InvalidNonce {
            context: "nonce must be in [1, n-1]",
        })?;
        Ok(Self { raw })
    }
}

impl Zeroize for Nonce {
    fn zeroize(&mut self) {
        self.raw.zeroize();
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nonce([REDACTED])")
    }
}

impl StarkSignature {
    /// Build a signature from big-endian r and s of any width
    pub fn from_components(r: &[u8], s: &[u8]) -> ApiResult<Self> {
        Ok(Self {
            r: signature_component(r, "r must be in [1, 2^251)")?,
            s: signature_component(s, "s must be in [1, 2^251)")?,
        })
    }

    /// Parse the 64-byte encoding r ∥ s
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let components = SignatureComponents::from_bytes(bytes)?;
        Self::from_components(&components.r, &components.s)
    }

    /// Serialize as r ∥ s
    pub fn to_bytes(&self) -> [u8; STARK_SIGNATURE_SIZE] {
        SignatureComponents {
            r: self.r,
            s: self.s,
        }
        .to_bytes()
    }

    /// The r component, big-endian
    pub fn r(&self) -> &[u8; INT_SIZE] {
        &self.r
    }

    /// The s component, big-endian
    pub fn s(&self) -> &[u8; INT_SIZE] {
        &self.s
    }
}

fn signature_component(bytes: &[u8], context: &'static str) -> ApiResult<[u8; INT_SIZE]> {
    let fixed = int_to_fixed(bytes).ok_or(ApiError::InvalidSignature { context })?;
    let in_range = below_element_bound(&fixed) && !bool::from(ct_is_zero(&fixed));
    if !in_range {
        return Err(ApiError::InvalidSignature { context });
    }
    Ok(fixed)
}

/// `Choice(1)` when `point` is finite and its x-coordinate mod n equals r
fn x_matches(point: &ec::Point, r: &ec::Scalar) -> Choice {
    let v = ec::Scalar::reduce(&point.x_coordinate_bytes());
    let finite = Choice::from(!point.is_identity() as u8);
    finite & ct_eq_choice(v.serialize(), r.serialize())
}

impl StarkEcdsa {
    /// Derive the public key Q = d·G
    pub fn get_public_key(secret_key: &StarkSecretKey) -> ApiResult<StarkPublicKey> {
        let point = ec::scalar_mult_base_g(&secret_key.raw).map_err(ApiError::from)?;
        StarkPublicKey::from_point(point)
    }

    /// Sign a message hash
    ///
    /// Without a nonce, k is derived per RFC 6979 from the key and hash, so
    /// the signature is reproducible; a k that yields an out-of-range r, s
    /// or w is replaced by re-deriving with the next retry seed. A supplied
    /// nonce is used as-is and fails with `InvalidNonce` if it is
    /// degenerate for these inputs.
    pub fn sign(
        secret_key: &StarkSecretKey,
        hash: &MessageHash,
        nonce: Option<&Nonce>,
    ) -> ApiResult<StarkSignature> {
        let d = &secret_key.raw;

        if let Some(nonce) = nonce {
            return Self::sign_with_k(d, hash, &nonce.raw)?.ok_or(ApiError::InvalidNonce {
                context: "nonce yields a degenerate signature",
            });
        }

        let mut seed = None;
        loop {
            let k = rfc6979::generate_k(d, hash.as_bytes(), seed)?;
            if let Some(signature) = Self::sign_with_k(d, hash, &k)? {
                return Ok(signature);
            }
            let next = seed.map_or(1, |s| s + 1);
            debug!(seed = next, "deterministic nonce rejected, resampling");
            seed = Some(next);
        }
    }

    /// Sign a message hash with a nonce drawn from `rng`
    ///
    /// The randomized alternative to [`StarkEcdsa::sign`]; signatures are
    /// not reproducible.
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        secret_key: &StarkSecretKey,
        hash: &MessageHash,
        rng: &mut R,
    ) -> ApiResult<StarkSignature> {
        loop {
            let k = ec::random_nonzero_scalar(rng);
            if let Some(signature) = Self::sign_with_k(&secret_key.raw, hash, &k)? {
                return Ok(signature);
            }
            debug!("random nonce rejected, resampling");
        }
    }

    /// Verify a signature
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match.
    /// Fails with `InvalidSignature` when s⁻¹ mod n is not below 2²⁵¹.
    ///
    /// Algorithm:
    /// 1. w = s⁻¹ mod n
    /// 2. u₁ = hw mod n and u₂ = rw mod n
    /// 3. Accept iff (u₁·G + u₂·Q) or (u₁·G − u₂·Q) is finite with x ≡ r (mod n)
    pub fn verify(
        public_key: &StarkPublicKey,
        hash: &MessageHash,
        signature: &StarkSignature,
    ) -> ApiResult<bool> {
        let r = ec::Scalar::reduce(&signature.r);
        let s = ec::Scalar::reduce(&signature.s);

        // Step 1: Compute w = s⁻¹ mod n
        let w = s.inv_mod_n().wrap_err(|| ApiError::InvalidSignature {
            context: "s is not invertible",
        })?;
        if !w.is_in_signature_range() {
            return Err(ApiError::InvalidSignature {
                context: "s^-1 must be below 2^251",
            });
        }

        // Step 2: Compute u₁ = hw mod n and u₂ = rw mod n
        let u1 = hash.to_scalar().mul_mod_n(&w);
        let u2 = r.mul_mod_n(&w);

        // Step 3: Compare both candidates against r without short-circuiting
        let u1g = ec::scalar_mult_base_g(&u1).map_err(ApiError::from)?;
        let u2q = ec::scalar_mult(&u2, &public_key.point).map_err(ApiError::from)?;
        let matched = x_matches(&u1g.add(&u2q), &r) | x_matches(&u1g.add(&u2q.negate()), &r);

        let valid: bool = matched.into();
        trace!(valid, "STARK ECDSA verification");
        Ok(valid)
    }

    /// One signing attempt with nonce k; `None` when k is degenerate
    fn sign_with_k(
        d: &ec::Scalar,
        hash: &MessageHash,
        k: &ec::Scalar,
    ) -> ApiResult<Option<StarkSignature>> {
        // Step 1: R = k·G
        let big_r = ec::scalar_mult_base_g(k).map_err(ApiError::from)?;

        // Step 2: r = R.x, which must lie in [1, 2²⁵¹)
        let r_bytes = big_r.x_coordinate_bytes();
        if big_r.is_identity() || !below_element_bound(&r_bytes) {
            return Ok(None);
        }
        let r = ec::Scalar::reduce(&r_bytes);
        if r.is_zero() {
            return Ok(None);
        }

        // Step 3: s = k⁻¹(h + rd) mod n
        let h_plus_rd = hash.to_scalar().add_mod_n(&r.mul_mod_n(d));
        if h_plus_rd.is_zero() {
            return Ok(None);
        }
        let k_inv = k.inv_mod_n().map_err(ApiError::from)?;
        let s = k_inv.mul_mod_n(&h_plus_rd);

        // Step 4: s and w = s⁻¹ must both lie in [1, 2²⁵¹)
        if !s.is_in_signature_range() {
            return Ok(None);
        }
        let w = s.inv_mod_n().map_err(ApiError::from)?;
        if !w.is_in_signature_range() {
            return Ok(None);
        }

        Ok(Some(StarkSignature {
            r: r.serialize(),
            s: s.serialize(),
        }))
    }
}

/* ------------------------------------------------------------------------- */
/*                 Integer layer: big-endian byte strings                    */
/* ------------------------------------------------------------------------- */

/// Derive the x-only public key for a big-endian private key
pub fn get_public_key(private_key: &[u8]) -> ApiResult<[u8; STARK_PUBLIC_KEY_SIZE]> {
    let secret_key = StarkSecretKey::from_bytes(private_key)?;
    Ok(StarkEcdsa::get_public_key(&secret_key)?.x_bytes())
}

/// Sign a big-endian message hash, returning (r, s)
///
/// Inputs are validated in order: private key, message hash, nonce.
pub fn sign(
    private_key: &[u8],
    msg_hash: &[u8],
    nonce: Option<&[u8]>,
) -> ApiResult<([u8; INT_SIZE], [u8; INT_SIZE])> {
    let secret_key = StarkSecretKey::from_bytes(private_key)?;
    let hash = MessageHash::from_bytes(msg_hash)?;
    let nonce = nonce.map(Nonce::from_bytes).transpose()?;
    let signature = StarkEcdsa::sign(&secret_key, &hash, nonce.as_ref())?;
    Ok((signature.r, signature.s))
}

/// Verify (r, s) on a big-endian message hash against an x-only public key
pub fn verify(public_key: &[u8], msg_hash: &[u8], r: &[u8], s: &[u8]) -> ApiResult<bool> {
    let public_key = StarkPublicKey::from_x(public_key)?;
    let hash = MessageHash::from_bytes(msg_hash)?;
    let signature = StarkSignature::from_components(r, s)?;
    StarkEcdsa::verify(&public_key, &hash, &signature)
}

impl SignatureTrait for StarkEcdsa {
    type PublicKey = StarkPublicKey;
    type SecretKey = StarkSecretKey;
    type SignatureData = StarkSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-STARK"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (sk_scalar, pk_point) = ec::generate_keypair(rng).map_err(ApiError::from)?;
        let public_key = StarkPublicKey::from_point(pk_point)?;
        Ok((public_key, StarkSecretKey { raw: sk_scalar }))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// `message` is the big-endian message hash, not a raw message
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let hash = MessageHash::from_bytes(message)?;
        StarkEcdsa::sign(secret_key, &hash, None)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let hash = MessageHash::from_bytes(message)?;
        if StarkEcdsa::verify(public_key, &hash, signature)? {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature {
                context: "signature does not match",
            })
        }
    }
}

impl SignatureSerialize for StarkEcdsa {
    const PUBLIC_KEY_SIZE: usize = STARK_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = STARK_PRIVATE_KEY_SIZE;
    const SIGNATURE_SIZE: usize = STARK_SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.x_bytes().to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        if bytes.len() != STARK_PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "STARK public key",
                expected: STARK_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        StarkPublicKey::from_x(bytes)
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Vec<u8> {
        key.to_bytes().to_vec()
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        if bytes.len() != STARK_PRIVATE_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "STARK private key",
                expected: STARK_PRIVATE_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        StarkSecretKey::from_bytes(bytes)
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.to_bytes().to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        StarkSignature::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests;
