//! STARK scalar arithmetic operations

use crate::ec::stark::arith::{self, Limbs, NLIMBS};
use crate::ec::stark::constants::{bytes_to_limbs_le, limbs_to_bytes_be, STARK_SCALAR_SIZE};
use crate::error::{validate, Error, Result};
use core::fmt;
use starksig_internal::ct_lt_be;
use starksig_params::traditional::ecdsa::STARK_ELEMENT_BOUND;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// STARK scalar: integers mod n, where
/// n = 0x0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f (curve order).
///
/// Stored canonically (not in Montgomery form) and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(Limbs);

impl Scalar {
    /// Order n in little‐endian limbs
    const N_LIMBS: Limbs = [
        0xadc64d2f, // least significant 32 bits
        0x1e66a241, 0xcae7b232, 0xb781126d, 0xffffffff, 0xffffffff, 0x00000010,
        0x08000000, // most significant
    ];

    /// −n⁻¹ mod 2³²
    const N_INV: u32 = 0xe8bde631;

    /// R² mod n
    const N_R2: Limbs = [
        0xea1c688d, 0x6021b3f1, 0x14ce60b9, 0x509cf64d, 0xf78bbabb, 0xbaf0ab4c, 0x2333766e,
        0x07d9e57c,
    ];

    /// n − 2, the Fermat inversion exponent (big‐endian)
    const N_MINUS_2: [u8; 32] = [
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xb7, 0x81, 0x12, 0x6d, 0xca, 0xe7, 0xb2, 0x32, 0x1e, 0x66, 0xa2, 0x41, 0xad, 0xc6,
        0x4d, 0x2d,
    ];

    /// Create a scalar from big‐endian bytes.
    /// Accepts [1, n−1]; zero and values ≥ n are rejected.
    pub fn new(bytes: [u8; STARK_SCALAR_SIZE]) -> Result<Self> {
        let scalar = Self::from_canonical_bytes(&bytes)?;
        if scalar.is_zero() {
            return Err(Error::param("STARK Scalar", "Scalar cannot be zero"));
        }
        Ok(scalar)
    }

    /// Create a scalar from big‐endian bytes in [0, n−1]
    pub fn from_canonical_bytes(bytes: &[u8; STARK_SCALAR_SIZE]) -> Result<Self> {
        let limbs: Limbs = bytes_to_limbs_le(bytes);
        if !bool::from(arith::lt8(&limbs, &Self::N_LIMBS)) {
            return Err(Error::param("STARK Scalar", "Scalar ≥ group order"));
        }
        Ok(Scalar(limbs))
    }

    /// Reduce any 256‐bit big‐endian value mod n
    pub fn reduce(bytes: &[u8; STARK_SCALAR_SIZE]) -> Self {
        let limbs: Limbs = bytes_to_limbs_le(bytes);
        // x·R mod n, then back out of Montgomery form
        let mont = Self::mont_mul(&limbs, &Self::N_R2);
        Scalar(Self::mont_mul(&mont, &Self::one_limbs()))
    }

    /// Deserialize from a byte slice (with validation)
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("STARK Scalar", bytes.len(), STARK_SCALAR_SIZE)?;
        let mut tmp = [0u8; STARK_SCALAR_SIZE];
        tmp.copy_from_slice(bytes);
        let res = Self::new(tmp);
        tmp.zeroize();
        res
    }

    /// Serialize to big‐endian bytes
    pub fn serialize(&self) -> [u8; STARK_SCALAR_SIZE] {
        limbs_to_bytes_be(&self.0)
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        arith::is_zero8(&self.0).into()
    }

    /// Is this scalar in [1, 2²⁵¹)?
    ///
    /// Message hashes and signature components must satisfy this bound.
    pub fn is_in_signature_range(&self) -> bool {
        let below_bound = ct_lt_be(&self.serialize(), &STARK_ELEMENT_BOUND);
        (below_bound & !arith::is_zero8(&self.0)).into()
    }

    /// Add two scalars mod n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        Scalar(arith::add_mod(&self.0, &other.0, &Self::N_LIMBS))
    }

    /// Subtract two scalars mod n
    pub fn sub_mod_n(&self, other: &Self) -> Self {
        Scalar(arith::sub_mod(&self.0, &other.0, &Self::N_LIMBS))
    }

    /// Multiply two scalars mod n
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        // (a·b·R⁻¹)·R²·R⁻¹ = a·b
        let t = Self::mont_mul(&self.0, &other.0);
        Scalar(Self::mont_mul(&t, &Self::N_R2))
    }

    /// Compute inverse mod n via Fermat (n − 2)
    pub fn inv_mod_n(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::InvalidOperand {
                operation: "scalar inversion of zero",
            });
        }

        let base = Self::mont_mul(&self.0, &Self::N_R2);
        let one_mont = Self::mont_mul(&Self::one_limbs(), &Self::N_R2);
        let result = arith::mont_pow(
            &base,
            &Self::N_MINUS_2,
            &one_mont,
            &Self::N_LIMBS,
            Self::N_INV,
        );
        Ok(Scalar(Self::mont_mul(&result, &Self::one_limbs())))
    }

    /// Negate mod n: (n − self), or zero for zero
    pub fn negate(&self) -> Self {
        Scalar(arith::sub_mod(&[0u32; NLIMBS], &self.0, &Self::N_LIMBS))
    }

    /// Bit `i` of the canonical value (bit 0 is least significant)
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> Choice {
        Choice::from(((self.0[i / 32] >> (i % 32)) & 1) as u8)
    }

    #[inline(always)]
    fn mont_mul(a: &Limbs, b: &Limbs) -> Limbs {
        arith::mont_mul(a, b, &Self::N_LIMBS, Self::N_INV)
    }

    #[inline(always)]
    fn one_limbs() -> Limbs {
        let mut one = [0u32; NLIMBS];
        one[0] = 1;
        one
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
