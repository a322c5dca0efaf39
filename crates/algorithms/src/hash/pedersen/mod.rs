//! StarkEx Pedersen hash
//!
//! Hashes two field elements `a, b < p` to one field element:
//!
//! ```text
//! H(a, b) = (P0 + a_low·P1 + a_high·P2 + b_low·P3 + b_high·P4).x
//! ```
//!
//! where `a_low` is the low 248 bits of `a` and `a_high` the remaining
//! 4 bits. P0..P4 are fixed points on the STARK curve. All inputs are
//! public, so the hash makes no constant-time claims beyond those of the
//! underlying group operations.

use crate::ec::stark::{FieldElement, Point, Scalar, STARK_FIELD_ELEMENT_SIZE};
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use starksig_params::traditional::pedersen::{PEDERSEN_LOW_PART_BITS, PEDERSEN_POINTS};
use subtle::Choice;

/// P0..P4 as curve points
static POINTS: Lazy<[Point; 5]> = Lazy::new(|| {
    core::array::from_fn(|i| Point {
        is_identity: Choice::from(0),
        x: FieldElement::from_bytes_reduced(&PEDERSEN_POINTS[i].x),
        y: FieldElement::from_bytes_reduced(&PEDERSEN_POINTS[i].y),
    })
});

/// Number of leading bytes that make up the high part of an input
const HIGH_PART_BYTES: usize = STARK_FIELD_ELEMENT_SIZE - PEDERSEN_LOW_PART_BITS / 8;

/// Split a canonical encoding into (low 248 bits, high bits) as scalars
fn split(bytes: &[u8; STARK_FIELD_ELEMENT_SIZE]) -> Result<(Scalar, Scalar)> {
    let mut low = *bytes;
    low[..HIGH_PART_BYTES].fill(0);

    let mut high = [0u8; STARK_FIELD_ELEMENT_SIZE];
    high[STARK_FIELD_ELEMENT_SIZE - HIGH_PART_BYTES..].copy_from_slice(&bytes[..HIGH_PART_BYTES]);

    Ok((
        Scalar::from_canonical_bytes(&low)?,
        Scalar::from_canonical_bytes(&high)?,
    ))
}

/// Pedersen hash of two field elements
pub fn pedersen_hash(a: &FieldElement, b: &FieldElement) -> Result<FieldElement> {
    let points = &*POINTS;
    let mut acc = points[0];

    for (input, pair) in [a, b].iter().zip(points[1..].chunks_exact(2)) {
        let (low, high) = split(&input.to_bytes())?;
        acc = acc.add(&pair[0].mul(&low)).add(&pair[1].mul(&high));
    }

    if acc.is_identity() {
        return Err(Error::param(
            "Pedersen hash",
            "result is the point at infinity",
        ));
    }
    Ok(acc.x)
}

/// Pedersen hash over 32-byte big-endian encodings
///
/// Fails if either input is not below p.
pub fn pedersen_hash_bytes(
    a: &[u8; STARK_FIELD_ELEMENT_SIZE],
    b: &[u8; STARK_FIELD_ELEMENT_SIZE],
) -> Result<[u8; STARK_FIELD_ELEMENT_SIZE]> {
    let a = FieldElement::from_bytes(a)?;
    let b = FieldElement::from_bytes(b)?;
    Ok(pedersen_hash(&a, &b)?.to_bytes())
}
