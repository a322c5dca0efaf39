//! Shared constants and helper functions for STARK curve operations

pub use starksig_params::traditional::ecdsa::{
    STARK_ELEMENT_BOUND_BITS, STARK_FIELD_ELEMENT_SIZE, STARK_ORDER_BITS,
    STARK_POINT_COMPRESSED_SIZE, STARK_POINT_UNCOMPRESSED_SIZE, STARK_SCALAR_SIZE,
};

/// Helper function to convert big‐endian bytes to little‐endian limbs
#[inline]
pub fn bytes_to_limbs_le<const L: usize>(be_bytes: &[u8]) -> [u32; L] {
    let mut limbs = [0u32; L];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let offset = (L - 1 - i) * 4;
        *limb = u32::from_be_bytes([
            be_bytes[offset],
            be_bytes[offset + 1],
            be_bytes[offset + 2],
            be_bytes[offset + 3],
        ]);
    }
    limbs
}

/// Helper function to convert little‐endian limbs to big‐endian bytes
#[inline]
pub fn limbs_to_bytes_be<const L: usize>(limbs: &[u32; L]) -> [u8; STARK_FIELD_ELEMENT_SIZE] {
    let mut bytes = [0u8; STARK_FIELD_ELEMENT_SIZE];
    for (i, limb) in limbs.iter().enumerate() {
        let offset = (L - 1 - i) * 4;
        bytes[offset..offset + 4].copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}
