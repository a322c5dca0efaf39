//! Common utilities for ECDSA implementations

use starksig_api::{error::Error as ApiError, Result as ApiResult};
use starksig_internal::constant_time::ct_lt_be;
use starksig_params::traditional::ecdsa::{STARK_ELEMENT_BOUND, STARK_SIGNATURE_SIZE};

/// Width of every integer handled by the scheme, in bytes
pub const INT_SIZE: usize = 32;

/// ECDSA signature components (r, s) as big-endian integers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: [u8; INT_SIZE],
    pub s: [u8; INT_SIZE],
}

impl SignatureComponents {
    /// Serialize as the fixed-width concatenation r ∥ s
    pub fn to_bytes(&self) -> [u8; STARK_SIGNATURE_SIZE] {
        let mut out = [0u8; STARK_SIGNATURE_SIZE];
        out[..INT_SIZE].copy_from_slice(&self.r);
        out[INT_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Parse the fixed-width concatenation r ∥ s
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != STARK_SIGNATURE_SIZE {
            return Err(ApiError::InvalidLength {
                context: "STARK signature",
                expected: STARK_SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut r = [0u8; INT_SIZE];
        let mut s = [0u8; INT_SIZE];
        r.copy_from_slice(&bytes[..INT_SIZE]);
        s.copy_from_slice(&bytes[INT_SIZE..]);
        Ok(SignatureComponents { r, s })
    }
}

/// Left-pad a big-endian integer of any length to 32 bytes
///
/// Leading zero bytes are ignored, so `[0x00, 0x00, 0x01]` and `[0x01]`
/// encode the same value. Returns `None` if the value needs more than
/// 32 bytes.
pub fn int_to_fixed(bytes: &[u8]) -> Option<[u8; INT_SIZE]> {
    let first_nonzero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_nonzero..];
    if significant.len() > INT_SIZE {
        return None;
    }
    let mut out = [0u8; INT_SIZE];
    out[INT_SIZE - significant.len()..].copy_from_slice(significant);
    Some(out)
}

/// Is the 32-byte big-endian value below 2²⁵¹?
pub fn below_element_bound(value: &[u8; INT_SIZE]) -> bool {
    ct_lt_be(value, &STARK_ELEMENT_BOUND).into()
}
