//! STARK Curve Elliptic Curve Primitives
//!
//! This module implements the STARK-friendly curve used by StarkEx and
//! StarkNet signatures.
//! Curve equation: y² = x³ + αx + β over 𝔽ₚ, where
//! - p = 2²⁵¹ + 17·2¹⁹² + 1,
//! - α = 1,
//! - β = 0x06f21413efbe40de150e596d72f7a8c5609ad26c15c915c1f4cdfcb99cee9e89,
//! - Curve order n = 0x0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f.
//!
//! Implements:
//! - Montgomery multiplication for 𝔽ₚ and for scalars mod n,
//! - Homogeneous projective coordinates with complete addition formulas,
//! - Constant‐time Montgomery ladder scalar multiplication.

mod arith;
mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    STARK_ELEMENT_BOUND_BITS, STARK_FIELD_ELEMENT_SIZE, STARK_ORDER_BITS,
    STARK_POINT_COMPRESSED_SIZE, STARK_POINT_UNCOMPRESSED_SIZE, STARK_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use crate::error::Result;
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};
use starksig_params::traditional::ecdsa::STARK_CURVE;
use subtle::Choice;
use zeroize::Zeroize;

static BASE_POINT: Lazy<Point> = Lazy::new(|| Point {
    is_identity: Choice::from(0),
    x: FieldElement::from_bytes_reduced(&STARK_CURVE.g_x),
    y: FieldElement::from_bytes_reduced(&STARK_CURVE.g_y),
});

/// Get the standard base point G of the STARK curve
pub fn base_point_g() -> Point {
    *BASE_POINT
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    Ok(BASE_POINT.mul(scalar))
}

/// Generate a key pair: a uniform scalar in [1, n−1] and its public point
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let scalar = random_nonzero_scalar(rng);
    let point = scalar_mult_base_g(&scalar)?;
    Ok((scalar, point))
}

/// Rejection‐sample a scalar in [1, n−1]
///
/// n is just above 2²⁵¹, so masking the top byte to 252 bits keeps the
/// acceptance rate near one half.
pub fn random_nonzero_scalar<R: CryptoRng + RngCore>(rng: &mut R) -> Scalar {
    let mut scalar_bytes = [0u8; STARK_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut scalar_bytes);
        scalar_bytes[0] &= 0x0f;
        if let Ok(scalar) = Scalar::new(scalar_bytes) {
            scalar_bytes.zeroize();
            return scalar;
        }
    }
}

/// General scalar multiplication: compute scalar * arbitrary point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    if point.is_identity() {
        Ok(Point::identity())
    } else {
        Ok(point.mul(scalar))
    }
}
