//! STARK field arithmetic implementation

use crate::ec::stark::arith::{self, Limbs, NLIMBS};
use crate::ec::stark::constants::{bytes_to_limbs_le, limbs_to_bytes_be, STARK_FIELD_ELEMENT_SIZE};
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// STARK field element representing values in 𝔽ₚ, where
/// p = 2²⁵¹ + 17·2¹⁹² + 1.
/// Internally stored in Montgomery form (x·2²⁵⁶ mod p) as 8 little‐endian 32‐bit limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) Limbs);

impl FieldElement {
    /* ---------------------------------------------------------------- */
    /*  STARK Field Constants (little‐endian 32‐bit limbs)              */
    /* ---------------------------------------------------------------- */

    /// p = 0x0800000000000011000000000000000000000000000000000000000000000001
    pub(crate) const MOD_LIMBS: Limbs = [
        0x00000001, // least significant
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000011,
        0x08000000, // most significant
    ];

    /// −p⁻¹ mod 2³²
    const INV: u32 = 0xffffffff;

    /// R² mod p, used to enter Montgomery form
    const R2: Limbs = [
        0x7e000401, 0xfffffd73, 0x330fffff, 0x00000001, 0xff6f8000, 0xffffffff, 0x5e008810,
        0x07ffd4ab,
    ];

    /// R mod p, i.e. 1 in Montgomery form
    const R: Limbs = [
        0xffffffe1, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xfffffdf0,
        0x07ffffff,
    ];

    /// p − 2, the Fermat inversion exponent (big‐endian)
    const P_MINUS_2: [u8; 32] = [
        0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff,
    ];

    /// p − 1 = Q·2^S with Q odd
    const TWO_ADICITY: u32 = 192;

    /// Q = (p − 1) / 2¹⁹²
    const Q: [u8; 8] = 0x0800_0000_0000_0011u64.to_be_bytes();

    /// (Q + 1) / 2
    const Q_PLUS_1_HALF: [u8; 8] = 0x0400_0000_0000_0009u64.to_be_bytes();

    /// Smallest quadratic non‐residue mod p
    const NON_RESIDUE: u32 = 3;

    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        Self::to_montgomery(&limbs)
    }

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        FieldElement(Self::R)
    }

    /// Create a field element from big‐endian bytes.
    /// Validates that the value < p. Returns Err if ≥ p.
    pub fn from_bytes(bytes: &[u8; STARK_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs: Limbs = bytes_to_limbs_le(bytes);
        if !bool::from(arith::lt8(&limbs, &Self::MOD_LIMBS)) {
            return Err(Error::param("FieldElement STARK", "Value ≥ modulus"));
        }
        Ok(Self::to_montgomery(&limbs))
    }

    /// Create a field element from any 256‐bit big‐endian value, reducing mod p
    pub fn from_bytes_reduced(bytes: &[u8; STARK_FIELD_ELEMENT_SIZE]) -> Self {
        Self::to_montgomery(&bytes_to_limbs_le(bytes))
    }

    /// Convert this field element into canonical big‐endian bytes.
    pub fn to_bytes(&self) -> [u8; STARK_FIELD_ELEMENT_SIZE] {
        limbs_to_bytes_be(&self.to_canonical())
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.is_zero_choice().into()
    }

    #[inline(always)]
    pub(crate) fn is_zero_choice(&self) -> Choice {
        arith::is_zero8(&self.0)
    }

    /// Return true if the canonical value is odd (least‐significant bit = 1).
    pub fn is_odd(&self) -> bool {
        self.is_odd_choice().into()
    }

    #[inline(always)]
    pub(crate) fn is_odd_choice(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }

    /// Constant‐time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(arith::add_mod(&self.0, &other.0, &Self::MOD_LIMBS))
    }

    /// Constant‐time subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        FieldElement(arith::sub_mod(&self.0, &other.0, &Self::MOD_LIMBS))
    }

    /// Field multiplication: (self * other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(arith::mont_mul(
            &self.0,
            &other.0,
            &Self::MOD_LIMBS,
            Self::INV,
        ))
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Negate this field element: p − self, or zero for zero
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Compute multiplicative inverse via Fermat: a^(p-2) mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::InvalidOperand {
                operation: "field inversion of zero",
            });
        }
        Ok(self.invert_or_zero())
    }

    /// a^(p−2), which maps zero to zero without branching
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow_be(&Self::P_MINUS_2)
    }

    /// Square root via Tonelli–Shanks (p − 1 = Q·2¹⁹²).
    ///
    /// Returns `None` when `self` is a quadratic non‐residue. Runs in
    /// variable time; only used on public inputs.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(FieldElement::zero());
        }

        let one = FieldElement::one();
        let mut m = Self::TWO_ADICITY;
        let mut c = FieldElement::from_u32(Self::NON_RESIDUE).pow_be(&Self::Q);
        let mut t = self.pow_be(&Self::Q);
        let mut r = self.pow_be(&Self::Q_PLUS_1_HALF);

        while t != one {
            // least i with t^(2^i) = 1
            let mut i = 0;
            let mut t2i = t;
            while t2i != one {
                t2i = t2i.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            m = i;
            c = b.square();
            t = t.mul(&c);
            r = r.mul(&b);
        }

        if r.square() == *self {
            Some(r)
        } else {
            None
        }
    }

    /* ================================================================= */
    /*  Private helper methods                                           */
    /* ================================================================= */

    #[inline(always)]
    fn to_montgomery(limbs: &Limbs) -> Self {
        FieldElement(arith::mont_mul(
            limbs,
            &Self::R2,
            &Self::MOD_LIMBS,
            Self::INV,
        ))
    }

    #[inline(always)]
    fn to_canonical(&self) -> Limbs {
        let mut one = [0u32; NLIMBS];
        one[0] = 1;
        arith::mont_mul(&self.0, &one, &Self::MOD_LIMBS, Self::INV)
    }

    fn pow_be(&self, exp_be: &[u8]) -> Self {
        FieldElement(arith::mont_pow(
            &self.0,
            exp_be,
            &Self::R,
            &Self::MOD_LIMBS,
            Self::INV,
        ))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(arith::select8(&a.0, &b.0, choice))
    }
}
