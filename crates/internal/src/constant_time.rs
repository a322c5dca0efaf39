//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns `Choice(1)` when every byte of `a` is zero
pub fn ct_is_zero(a: &[u8]) -> Choice {
    let mut acc = 0u8;
    for &byte in a {
        acc |= byte;
    }
    acc.ct_eq(&0)
}

/// Constant-time `a < b` for equal-length big-endian integers
///
/// Walks the bytes from least to most significant and propagates a borrow,
/// so the running time depends only on the length.
pub fn ct_lt_be<const N: usize>(a: &[u8; N], b: &[u8; N]) -> Choice {
    let mut borrow = 0u16;
    for i in (0..N).rev() {
        let diff = (a[i] as u16)
            .wrapping_sub(b[i] as u16)
            .wrapping_sub(borrow);
        borrow = (diff >> 8) & 1;
    }
    Choice::from(borrow as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_respects_length() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
        assert!(!ct_eq([1u8, 2], [1u8, 2, 3]));
        assert!(!bool::from(ct_eq_choice([0u8; 4], [0u8; 5])));
    }

    #[test]
    fn zero_detection() {
        assert!(bool::from(ct_is_zero(&[0u8; 32])));
        let mut v = [0u8; 32];
        v[31] = 1;
        assert!(!bool::from(ct_is_zero(&v)));
    }

    #[test]
    fn lt_matches_integer_order() {
        let a = [0x00, 0x01, 0xff];
        let b = [0x00, 0x02, 0x00];
        assert!(bool::from(ct_lt_be(&a, &b)));
        assert!(!bool::from(ct_lt_be(&b, &a)));
        assert!(!bool::from(ct_lt_be(&a, &a)));

        let high = [0x08, 0x00, 0x00, 0x00];
        let below = [0x07, 0xff, 0xff, 0xff];
        assert!(bool::from(ct_lt_be(&below, &high)));
        assert!(!bool::from(ct_lt_be(&high, &below)));
    }
}
