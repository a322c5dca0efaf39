//! Property-based tests for ECDSA over the STARK curve

use proptest::prelude::*;
use starksig::sign::traditional::ecdsa::stark;

/// A private key in [1, 2²⁵¹)
fn private_key() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
        .prop_map(|mut d| {
            d[0] &= 0x07;
            d
        })
        .prop_filter("private key must be non-zero", |d| d.iter().any(|&b| b != 0))
}

/// A message hash in [0, 2²⁵¹)
fn message_hash() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>().prop_map(|mut h| {
        h[0] &= 0x07;
        h
    })
}

/// Index of a bit below 2²⁵¹, counted from the least significant bit
fn low_bit() -> impl Strategy<Value = usize> {
    0usize..251
}

fn flip_bit(value: &mut [u8; 32], bit: usize) {
    value[31 - bit / 8] ^= 1 << (bit % 8);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_verify_roundtrip(d in private_key(), h in message_hash()) {
        let pk = stark::get_public_key(&d).unwrap();
        let (r, s) = stark::sign(&d, &h, None).unwrap();
        prop_assert!(stark::verify(&pk, &h, &r, &s).unwrap());
    }

    #[test]
    fn signing_is_deterministic(d in private_key(), h in message_hash()) {
        let first = stark::sign(&d, &h, None).unwrap();
        let second = stark::sign(&d, &h, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn flipped_hash_bit_is_rejected(
        d in private_key(),
        h in message_hash(),
        bit in low_bit()
    ) {
        let pk = stark::get_public_key(&d).unwrap();
        let (r, s) = stark::sign(&d, &h, None).unwrap();
        let mut tampered = h;
        flip_bit(&mut tampered, bit);
        prop_assert!(!matches!(stark::verify(&pk, &tampered, &r, &s), Ok(true)));
    }

    #[test]
    fn flipped_signature_bit_is_rejected(
        d in private_key(),
        h in message_hash(),
        bit in low_bit(),
        in_r in any::<bool>()
    ) {
        let pk = stark::get_public_key(&d).unwrap();
        let (mut r, mut s) = stark::sign(&d, &h, None).unwrap();
        if in_r {
            flip_bit(&mut r, bit);
        } else {
            flip_bit(&mut s, bit);
        }
        prop_assert!(!matches!(stark::verify(&pk, &h, &r, &s), Ok(true)));
    }

    #[test]
    fn flipped_public_key_bit_is_rejected(
        d in private_key(),
        h in message_hash(),
        bit in low_bit()
    ) {
        let mut pk = stark::get_public_key(&d).unwrap();
        let (r, s) = stark::sign(&d, &h, None).unwrap();
        flip_bit(&mut pk, bit);
        prop_assert!(!matches!(stark::verify(&pk, &h, &r, &s), Ok(true)));
    }

    #[test]
    fn distinct_private_keys_give_distinct_public_keys(
        d1 in private_key(),
        d2 in private_key()
    ) {
        // d and n - d share an x-coordinate; random draws never hit that pair
        prop_assume!(d1 != d2);
        prop_assert_ne!(
            stark::get_public_key(&d1).unwrap(),
            stark::get_public_key(&d2).unwrap()
        );
    }

    #[test]
    fn leading_zeros_do_not_change_results(d in private_key(), h in message_hash()) {
        let mut padded = vec![0u8; 5];
        padded.extend_from_slice(&h);
        prop_assert_eq!(
            stark::sign(&d, &h, None).unwrap(),
            stark::sign(&d, &padded, None).unwrap()
        );
    }
}
