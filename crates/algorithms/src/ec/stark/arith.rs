//! Eight-limb modular arithmetic shared by the field and scalar types
//!
//! All values are 256-bit integers held as little-endian `u32` limbs. The
//! moduli used here (p and n) are both below 2²⁵², so sums of two reduced
//! values never overflow the top limb.

use subtle::{Choice, ConditionallySelectable};

/// Number of 32‐bit limbs (8 × 32 = 256 bits)
pub(crate) const NLIMBS: usize = 8;

pub(crate) type Limbs = [u32; NLIMBS];

/// 8‐limb addition with carry
#[inline(always)]
pub(crate) fn adc8(a: &Limbs, b: &Limbs) -> (Limbs, u32) {
    let mut r = [0u32; NLIMBS];
    let mut carry = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64) + (b_limb as u64) + carry;
        *r_limb = tmp as u32;
        carry = tmp >> 32;
    }
    (r, carry as u32)
}

/// 8‐limb subtraction with borrow
#[inline(always)]
pub(crate) fn sbb8(a: &Limbs, b: &Limbs) -> (Limbs, u32) {
    let mut r = [0u32; NLIMBS];
    let mut borrow = 0u64;
    for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
        let tmp = (a_limb as u64)
            .wrapping_sub(b_limb as u64)
            .wrapping_sub(borrow);
        *r_limb = tmp as u32;
        borrow = (tmp >> 63) & 1;
    }
    (r, borrow as u32)
}

/// Constant‐time select: if flag == 0 return a else return b
#[inline(always)]
pub(crate) fn select8(a: &Limbs, b: &Limbs, flag: Choice) -> Limbs {
    let mut out = [0u32; NLIMBS];
    for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *out_limb = u32::conditional_select(a_limb, b_limb, flag);
    }
    out
}

/// Returns `Choice(1)` when all limbs are zero
#[inline(always)]
pub(crate) fn is_zero8(a: &Limbs) -> Choice {
    let acc = a.iter().fold(0u32, |acc, &limb| acc | limb);
    Choice::from(((acc | acc.wrapping_neg()) >> 31) as u8 ^ 1)
}

/// Returns `Choice(1)` when a < m
#[inline(always)]
pub(crate) fn lt8(a: &Limbs, m: &Limbs) -> Choice {
    let (_, borrow) = sbb8(a, m);
    Choice::from(borrow as u8)
}

/// (a + b) mod m for a, b < m
#[inline(always)]
pub(crate) fn add_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (sum, carry) = adc8(a, b);
    let (reduced, borrow) = sbb8(&sum, m);
    // subtract m if the sum overflowed or is still >= m
    let need_reduce = (carry | (borrow ^ 1)) & 1;
    select8(&sum, &reduced, Choice::from(need_reduce as u8))
}

/// (a - b) mod m for a, b < m
#[inline(always)]
pub(crate) fn sub_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (diff, borrow) = sbb8(a, b);
    let (diff_plus_m, _) = adc8(&diff, m);
    select8(&diff, &diff_plus_m, Choice::from(borrow as u8))
}

/// Montgomery multiplication: a·b·R⁻¹ mod m with R = 2²⁵⁶
///
/// Coarsely integrated operand scanning (CIOS). `inv` is −m⁻¹ mod 2³².
/// The output is fully reduced provided a·b < m·R, which holds whenever
/// one operand is below m and the other below R.
pub(crate) fn mont_mul(a: &Limbs, b: &Limbs, m: &Limbs, inv: u32) -> Limbs {
    let mut t = [0u32; NLIMBS + 2];

    for &b_limb in b.iter() {
        // t += a · b[i]
        let mut carry = 0u64;
        for j in 0..NLIMBS {
            let tmp = (t[j] as u64) + (a[j] as u64) * (b_limb as u64) + carry;
            t[j] = tmp as u32;
            carry = tmp >> 32;
        }
        let tmp = (t[NLIMBS] as u64) + carry;
        t[NLIMBS] = tmp as u32;
        t[NLIMBS + 1] = (tmp >> 32) as u32;

        // t = (t + q·m) / 2³² with q chosen so the low limb cancels
        let q = t[0].wrapping_mul(inv);
        let tmp = (t[0] as u64) + (q as u64) * (m[0] as u64);
        let mut carry = tmp >> 32;
        for j in 1..NLIMBS {
            let tmp = (t[j] as u64) + (q as u64) * (m[j] as u64) + carry;
            t[j - 1] = tmp as u32;
            carry = tmp >> 32;
        }
        let tmp = (t[NLIMBS] as u64) + carry;
        t[NLIMBS - 1] = tmp as u32;
        t[NLIMBS] = t[NLIMBS + 1] + (tmp >> 32) as u32;
        t[NLIMBS + 1] = 0;
    }

    let mut out = [0u32; NLIMBS];
    out.copy_from_slice(&t[..NLIMBS]);

    // result < 2m, one conditional subtraction finishes the reduction
    let (reduced, borrow) = sbb8(&out, m);
    let need_reduce = (t[NLIMBS] | (borrow ^ 1)) & 1;
    select8(&out, &reduced, Choice::from(need_reduce as u8))
}

/// Montgomery exponentiation with a public big-endian exponent
///
/// `base` and `one` are in Montgomery form. The exponent is public (p−2,
/// n−2, Tonelli–Shanks constants), so branching on its bits is fine.
pub(crate) fn mont_pow(base: &Limbs, exp_be: &[u8], one: &Limbs, m: &Limbs, inv: u32) -> Limbs {
    let mut result = *one;
    for &byte in exp_be.iter() {
        for bit in (0..8).rev() {
            result = mont_mul(&result, &result, m, inv);
            if (byte >> bit) & 1 == 1 {
                result = mont_mul(&result, base, m, inv);
            }
        }
    }
    result
}
