//! Constants for ECDSA over the STARK curve
//!
//! The curve is the short Weierstrass curve `y^2 = x^3 + alpha*x + beta`
//! over the prime field of order `p = 2^251 + 17*2^192 + 1`. All values are
//! 32-byte big-endian encodings.

/// Size of an encoded field element in bytes
pub const STARK_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an encoded scalar in bytes
pub const STARK_SCALAR_SIZE: usize = 32;

/// Size of a private key in bytes
pub const STARK_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a public key in bytes (x-coordinate only)
pub const STARK_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an uncompressed point encoding in bytes (0x04 || x || y)
pub const STARK_POINT_UNCOMPRESSED_SIZE: usize = 65;

/// Size of a compressed point encoding in bytes (0x02/0x03 || x)
pub const STARK_POINT_COMPRESSED_SIZE: usize = 33;

/// Size of a signature in bytes (r || s)
pub const STARK_SIGNATURE_SIZE: usize = 64;

/// Number of bits in the group order
pub const STARK_ORDER_BITS: usize = 252;

/// Message hashes and signature components must be strictly below 2^251
pub const STARK_ELEMENT_BOUND_BITS: usize = 251;

/// Structure containing STARK curve parameters
pub struct StarkCurveParams {
    /// Field modulus
    pub p: [u8; 32],

    /// Curve coefficient alpha
    pub a: [u8; 32],

    /// Curve coefficient beta
    pub b: [u8; 32],

    /// Base point x-coordinate
    pub g_x: [u8; 32],

    /// Base point y-coordinate
    pub g_y: [u8; 32],

    /// Order of the base point
    pub n: [u8; 32],

    /// Cofactor
    pub h: u32,
}

/// STARK curve parameters
pub const STARK_CURVE: StarkCurveParams = StarkCurveParams {
    p: [
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ],
    a: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ],
    b: [
        0x06, 0xf2, 0x14, 0x13, 0xef, 0xbe, 0x40, 0xde,
        0x15, 0x0e, 0x59, 0x6d, 0x72, 0xf7, 0xa8, 0xc5,
        0x60, 0x9a, 0xd2, 0x6c, 0x15, 0xc9, 0x15, 0xc1,
        0xf4, 0xcd, 0xfc, 0xb9, 0x9c, 0xee, 0x9e, 0x89,
    ],
    g_x: [
        0x01, 0xef, 0x15, 0xc1, 0x85, 0x99, 0x97, 0x1b,
        0x7b, 0xec, 0xed, 0x41, 0x5a, 0x40, 0xf0, 0xc7,
        0xde, 0xac, 0xfd, 0x9b, 0x0d, 0x18, 0x19, 0xe0,
        0x3d, 0x72, 0x3d, 0x8b, 0xc9, 0x43, 0xcf, 0xca,
    ],
    g_y: [
        0x00, 0x56, 0x68, 0x06, 0x0a, 0xa4, 0x97, 0x30,
        0xb7, 0xbe, 0x48, 0x01, 0xdf, 0x46, 0xec, 0x62,
        0xde, 0x53, 0xec, 0xd1, 0x1a, 0xbe, 0x43, 0xa3,
        0x28, 0x73, 0x00, 0x0c, 0x36, 0xe8, 0xdc, 0x1f,
    ],
    n: [
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xb7, 0x81, 0x12, 0x6d, 0xca, 0xe7, 0xb2, 0x32,
        0x1e, 0x66, 0xa2, 0x41, 0xad, 0xc6, 0x4d, 0x2f,
    ],
    h: 1,
};

/// 2^251 as a 32-byte big-endian integer
pub const STARK_ELEMENT_BOUND: [u8; 32] = [
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ];
