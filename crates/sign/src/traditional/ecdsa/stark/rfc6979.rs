//! Deterministic nonce derivation (RFC 6979, HMAC-SHA256)
//!
//! Follows the StarkEx flavour: the message hash enters untruncated as a
//! 32-byte integer, candidates are the top 252 bits of V, and an optional
//! retry seed is appended as additional data so a rejected nonce can be
//! replaced by a fresh deterministic one.

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use starksig_algorithms::ec::stark as ec;
use starksig_api::{error::Error as ApiError, Result as ApiResult};
use zeroize::{Zeroize, Zeroizing};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 over the concatenation of `parts`
fn hmac_sha256(key: &[u8; 32], parts: &[&[u8]]) -> ApiResult<[u8; 32]> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| ApiError::Other {
        context: "RFC 6979",
        message: "HMAC key rejected".to_string(),
    })?;
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Minimal big-endian encoding of the retry seed (empty for zero)
fn seed_bytes(seed: u64) -> ([u8; 8], usize) {
    let bytes = seed.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    (bytes, skip)
}

/// int(V) >> 4, keeping the leftmost 252 bits of the 256-bit block
fn bits2int(v: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[0] = v[0] >> 4;
    for i in 1..32 {
        out[i] = (v[i] >> 4) | (v[i - 1] << 4);
    }
    out
}

/// Derive the nonce k ∈ [1, n−1] for private key `d` and message hash `h`
///
/// `seed` is `None` on the first attempt and `Some(1)`, `Some(2)`, … when
/// the signer needs another nonce for the same inputs.
pub(crate) fn generate_k(
    d: &ec::Scalar,
    h: &[u8; 32],
    seed: Option<u64>,
) -> ApiResult<ec::Scalar> {
    let x = Zeroizing::new(d.serialize());
    let (seed_buf, skip) = seed.map(seed_bytes).unwrap_or(([0u8; 8], 8));
    let extra = &seed_buf[skip..];

    let mut k = Zeroizing::new([0x00u8; 32]);
    let mut v = Zeroizing::new([0x01u8; 32]);

    // ----- steps D-G -----
    // K = HMAC_K(V || i || int2octets(x) || bits2octets(h) || seed), V = HMAC_K(V)
    for round in [0x00u8, 0x01] {
        *k = hmac_sha256(&k, &[&v[..], &[round], &x[..], h, extra])?;
        *v = hmac_sha256(&k, &[&v[..]])?;
    }

    // ----- step H -----
    loop {
        *v = hmac_sha256(&k, &[&v[..]])?;
        let mut candidate = bits2int(&v);
        let accepted = ec::Scalar::new(candidate);
        candidate.zeroize();
        if let Ok(nonce) = accepted {
            return Ok(nonce);
        }

        *k = hmac_sha256(&k, &[&v[..], &[0x00]])?;
        *v = hmac_sha256(&k, &[&v[..]])?;
    }
}
