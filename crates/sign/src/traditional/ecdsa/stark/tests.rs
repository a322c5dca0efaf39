//! Tests for ECDSA over the STARK curve

use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/* ------------------------------------------------------------------------- */
/*                                 Helpers                                   */
/* ------------------------------------------------------------------------- */

/// Decode a big-endian hex integer, tolerating an odd number of digits
fn int(s: &str) -> Vec<u8> {
    if s.len() % 2 == 1 {
        hex::decode(format!("0{s}")).unwrap()
    } else {
        hex::decode(s).unwrap()
    }
}

fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

const PRIVATE_KEY: &str = "03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc";
const PUBLIC_KEY_X: &str = "077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43";
const PUBLIC_KEY_Y: &str = "054d7beec5ec728223671c627557efc5c9a6508425dc6c900b7741bf60afec06";
const PUBLIC_KEY_Y_NEG: &str = "02b284113a138d8edc98e39d8aa8103a3659af7bda23936ff488be409f5013fb";

/// (message hash, r, s) signed deterministically with `PRIVATE_KEY`
const SIGNATURE_VECTORS: &[(&str, &str, &str)] = &[
    (
        "1",
        "06fdd4e4bf3fcd781997f9deba654356e629177ce4d804bc527044f222828f25",
        "033302ce7c82a7e199a8d7faaae8a53a2f447c9dd1262b1862b03a46104bc1d2",
    ),
    (
        "11",
        "050c1c19a8c354f51341284ff6ba39c5d833539fe3065a14dd67b48a4c6644c0",
        "066ca9c561787fd3968291ad11ef08a0da9d5609210653dc6aeabccc1019a41c",
    ),
    (
        "223",
        "064de33a0f937f05ec2d29383b51d5bf129d59688e472f489e914e6d9ed551db",
        "04ecb346cf49f96eb41a690a2e95831a638f489400bb12f5e2d4f2d8232bcdb2",
    ),
    (
        "9999",
        "07d9ea8202107f59217cb34daf6bbc8bbaa72322771a688d610b1a66e0ccb8e8",
        "05b4c4321b2541bbfc3dfa5f471d79446fd59557040c130c42c2a82d7baab09d",
    ),
    (
        "387e76d1667c4454bfb835144120583af836f8e32a516765497d23eabe16b3f",
        "07c75f1b8755e92bf581d7a4443638dcbaa17a9ab090fddbbced37fe40811860",
        "06b9e486e0af1e1e7357493196efc420c8f57d3d7c0d4c26e7f96f0f5c3427ee",
    ),
    (
        "3a7e76d1697c4455bfb835144120283af236f8e32a516765497d23eabe16b2",
        "05003481e79bf47137f521efefab1ba7afcc34e9e2c4dff707f9d0caa6308521",
        "05fd11e324abc8da607737476299410842983ca62d4f14bc02723d37a1c5408c",
    ),
    (
        "fa5f0cd1ebff93c9e6474379a213ba111f9e42f2f1cb361b0327e0737203",
        "06ab890fe12717f3c583f61edd2392c56cae2b3444f57e86992f93b5eed26e2a",
        "00ad45cc79e87cb344946e1d44e2442579ffa42655b78c16512a6176607d8c62",
    ),
    (
        "4c1e9550e66958296d11b60f8e8e7f7ae99dd0cfa6bd5fa652c1a6c87d4e2cc",
        "07e06ed47a11fdea1002060b444145790c50b3a3f72863361ea19226543f8fcf",
        "0454a42c7082ea0b07c178fc8b5f0627c0c47bb3242228fa55954b2fc755a124",
    ),
    (
        "6362b40c218fb4c8a8bd42ca482145e8513b78e00faa0de76a98ba14fc37ae8",
        "07b4c1635bd2a206f8f3ad24f3d3eb504a8d205add1afb2cac10ee6f1a19d61e",
        "01fc04e9c2bb21db65b2b73b2c75749800969bf744e199cb3022ba89e9e88a58",
    ),
];

/// A private key whose signature over h = 1 with k = 1 has s = 0
const DEGENERATE_KEY: &str = "0497f831fa579d38a8e4c3ede23b566cf716d68ebf0e329c3d69f7f391d0a1d0";

const ELEMENT_BOUND: &str = "0800000000000000000000000000000000000000000000000000000000000000";
const CURVE_ORDER: &str = "0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2f";
const FIELD_PRIME: &str = "0800000000000011000000000000000000000000000000000000000000000001";

/* ------------------------------------------------------------------------- */
/*                             Public key derivation                         */
/* ------------------------------------------------------------------------- */

#[test]
fn test_get_public_key_vector() {
    let x = get_public_key(&int(PRIVATE_KEY)).unwrap();
    assert_eq!(to_hex(&x), PUBLIC_KEY_X);

    let x = get_public_key(&int("12")).unwrap();
    assert_eq!(
        to_hex(&x),
        "019661066e96a8b9f06a1d136881ee924dfb6a885239caa5fd3f87a54c6b25c4"
    );
}

#[test]
fn test_get_public_key_full_point() {
    let sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    let pk = StarkEcdsa::get_public_key(&sk).unwrap();
    assert_eq!(to_hex(&pk.x_bytes()), PUBLIC_KEY_X);
    assert_eq!(to_hex(&pk.y_bytes()), PUBLIC_KEY_Y);
    assert_eq!(pk.to_uncompressed()[0], 0x04);
    assert_eq!(pk.to_compressed()[0], 0x02);
}

#[test]
fn test_get_public_key_of_one_is_generator() {
    let x = get_public_key(&[1]).unwrap();
    assert_eq!(x, ec::base_point_g().x_coordinate_bytes());
}

#[test]
fn test_get_public_key_rejects_out_of_range_keys() {
    for bad in [
        vec![],
        vec![0u8; 32],
        int(CURVE_ORDER),
        vec![0xff; 32],
        vec![0x01; 33],
    ] {
        assert!(matches!(
            get_public_key(&bad),
            Err(ApiError::InvalidPrivateKey { .. })
        ));
    }
}

#[test]
fn test_private_key_accepts_leading_zeros() {
    let mut padded = vec![0u8; 8];
    padded.extend_from_slice(&int(PRIVATE_KEY));
    assert_eq!(to_hex(&get_public_key(&padded).unwrap()), PUBLIC_KEY_X);
}

#[test]
fn test_largest_private_key() {
    // n - 1 maps to -G, which shares its x-coordinate with G
    let x = get_public_key(&int(
        "0800000000000010ffffffffffffffffb781126dcae7b2321e66a241adc64d2e",
    ))
    .unwrap();
    assert_eq!(x, ec::base_point_g().x_coordinate_bytes());
}

/* ------------------------------------------------------------------------- */
/*                                  Signing                                  */
/* ------------------------------------------------------------------------- */

#[test]
fn test_sign_reference_vectors() {
    let d = int(PRIVATE_KEY);
    for (h, r_hex, s_hex) in SIGNATURE_VECTORS {
        let (r, s) = sign(&d, &int(h), None).unwrap();
        assert_eq!(to_hex(&r), *r_hex, "r mismatch for hash {h}");
        assert_eq!(to_hex(&s), *s_hex, "s mismatch for hash {h}");
    }
}

#[test]
fn test_reference_vectors_verify() {
    let pk = int(PUBLIC_KEY_X);
    for (h, r_hex, s_hex) in SIGNATURE_VECTORS {
        assert!(verify(&pk, &int(h), &int(r_hex), &int(s_hex)).unwrap());
    }
}

#[test]
fn test_sign_is_deterministic() {
    let sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    let hash = MessageHash::from_bytes(&int("abcdef")).unwrap();
    let first = StarkEcdsa::sign(&sk, &hash, None).unwrap();
    let second = StarkEcdsa::sign(&sk, &hash, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sign_with_explicit_nonce() {
    let d = int(PRIVATE_KEY);
    let (r, s) = sign(&d, &[1], Some(&int("1234567890abcdef"))).unwrap();
    assert_eq!(
        to_hex(&r),
        "02abbefdcbf731195ee2acd186441eb536e86f888327b3655cffbd07b57dbf26"
    );
    assert_eq!(
        to_hex(&s),
        "038b2f196e24f679ef9bf971c68969c286f62fcefcc160b266bada7e4fcc219e"
    );

    let (r, s) = sign(&d, &[5], Some(&[2])).unwrap();
    assert_eq!(
        to_hex(&r),
        "0759ca09377679ecd535a81e83039658bf40959283187c654c5416f439403cf5"
    );
    assert_eq!(
        to_hex(&s),
        "049aed5bd3a343246011f7c10f6ef0306a317781cd39d5ea01664ae9670e79d7"
    );
    assert!(verify(&int(PUBLIC_KEY_X), &[5], &r, &s).unwrap());
}

#[test]
fn test_degenerate_explicit_nonce_is_rejected() {
    let result = sign(&int(DEGENERATE_KEY), &[1], Some(&[1]));
    assert!(matches!(result, Err(ApiError::InvalidNonce { .. })));
}

#[test]
fn test_deterministic_nonce_for_degenerate_key() {
    let d = int(DEGENERATE_KEY);
    let (r, s) = sign(&d, &[1], None).unwrap();
    assert_eq!(
        to_hex(&r),
        "0029f605bb36f1458d4647f80f4e883a3d4a1deeaed06066427aea6deaec5bf8"
    );
    assert_eq!(
        to_hex(&s),
        "05717d7e7fca061808d9924104eec5129d63a4fa77305cdd479ed7a08ecb3c08"
    );
    let pk = get_public_key(&d).unwrap();
    assert!(verify(&pk, &[1], &r, &s).unwrap());
}

#[test]
fn test_sign_rejects_invalid_nonce() {
    let d = int(PRIVATE_KEY);
    for bad in [vec![0u8], int(CURVE_ORDER), vec![0x01; 33]] {
        assert!(matches!(
            sign(&d, &[1], Some(&bad)),
            Err(ApiError::InvalidNonce { .. })
        ));
    }
}

#[test]
fn test_sign_message_hash_bounds() {
    let d = int(PRIVATE_KEY);

    assert!(sign(&d, &[], None).is_ok());
    assert!(sign(&d, &[0], None).is_ok());
    assert!(sign(
        &d,
        &int("07ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        None
    )
    .is_ok());

    assert!(matches!(
        sign(&d, &int(ELEMENT_BOUND), None),
        Err(ApiError::InvalidMessageHash { .. })
    ));
    assert!(matches!(
        sign(&d, &int(&"f".repeat(67)), None),
        Err(ApiError::InvalidMessageHash { .. })
    ));
}

#[test]
fn test_sign_validation_order() {
    // Private key is checked before the hash, the hash before the nonce
    assert!(matches!(
        sign(&[0], &int(ELEMENT_BOUND), Some(&[0])),
        Err(ApiError::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        sign(&int(PRIVATE_KEY), &int(ELEMENT_BOUND), Some(&[0])),
        Err(ApiError::InvalidMessageHash { .. })
    ));
}

#[test]
fn test_signature_components_in_range() {
    let sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    for i in 0u32..16 {
        let hash = MessageHash::from_bytes(&(i * 7919).to_be_bytes()).unwrap();
        let sig = StarkEcdsa::sign(&sk, &hash, None).unwrap();
        assert!(below_element_bound(sig.r()));
        assert!(below_element_bound(sig.s()));
        let w = ec::Scalar::reduce(sig.s()).inv_mod_n().unwrap();
        assert!(w.is_in_signature_range());
    }
}

#[test]
fn test_sign_with_rng_round_trip() {
    let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
    let sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    let pk = StarkEcdsa::get_public_key(&sk).unwrap();
    let hash = MessageHash::from_bytes(&int("deadbeef")).unwrap();

    let first = StarkEcdsa::sign_with_rng(&sk, &hash, &mut rng).unwrap();
    let second = StarkEcdsa::sign_with_rng(&sk, &hash, &mut rng).unwrap();
    assert_ne!(first, second);
    assert!(StarkEcdsa::verify(&pk, &hash, &first).unwrap());
    assert!(StarkEcdsa::verify(&pk, &hash, &second).unwrap());
}

/* ------------------------------------------------------------------------- */
/*                                Verification                               */
/* ------------------------------------------------------------------------- */

#[test]
fn test_verify_known_valid_signature() {
    let pk = ec::base_point_g().x_coordinate_bytes();
    let valid = verify(
        &pk,
        &[2],
        &int("0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        &int("0405c3191ab3883ef2b763af35bc5f5d15b3b4e99461d70e84c654a351a7c81b"),
    )
    .unwrap();
    assert!(valid);
}

#[test]
fn test_verify_known_invalid_signature() {
    let valid = verify(
        &int("077a4b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
        &int("0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f"),
        &int("0173fd03d8b008ee7432977ac27d1e9d1a1f6c98b1a2f05fa84a21c84c44e882"),
        &int("01f2c44a7798f55192f153b4c48ea5c1241fbb69e6132cc8a0da9c5b62a4286e"),
    )
    .unwrap();
    assert!(!valid);
}

#[test]
fn test_verify_rejects_modified_inputs() {
    let pk = int(PUBLIC_KEY_X);
    let (h, r_hex, s_hex) = SIGNATURE_VECTORS[4];
    let (h, r, s) = (int(h), int(r_hex), int(s_hex));

    let mut other_hash = h.clone();
    other_hash[31] ^= 1;
    assert!(!verify(&pk, &other_hash, &r, &s).unwrap());

    let mut other_s = s.clone();
    other_s[31] ^= 1;
    assert!(!matches!(verify(&pk, &h, &r, &other_s), Ok(true)));

    let other_pk = get_public_key(&[0x12]).unwrap();
    assert!(!verify(&other_pk, &h, &r, &s).unwrap());
}

#[test]
fn test_verify_accepts_either_y() {
    let hash = MessageHash::from_bytes(&int(SIGNATURE_VECTORS[0].0)).unwrap();
    let sig =
        StarkSignature::from_components(&int(SIGNATURE_VECTORS[0].1), &int(SIGNATURE_VECTORS[0].2))
            .unwrap();

    let even = StarkPublicKey::from_coordinates(&int(PUBLIC_KEY_X), &int(PUBLIC_KEY_Y)).unwrap();
    let odd = StarkPublicKey::from_coordinates(&int(PUBLIC_KEY_X), &int(PUBLIC_KEY_Y_NEG)).unwrap();
    assert_eq!(even, odd);
    assert!(StarkEcdsa::verify(&even, &hash, &sig).unwrap());
    assert!(StarkEcdsa::verify(&odd, &hash, &sig).unwrap());
}

#[test]
fn test_verify_rejects_bad_public_key() {
    let (h, r, s) = SIGNATURE_VECTORS[0];
    for bad in [int("5"), int(FIELD_PRIME), vec![0xff; 32], vec![0x01; 33]] {
        assert!(matches!(
            verify(&bad, &int(h), &int(r), &int(s)),
            Err(ApiError::InvalidPublicKey { .. })
        ));
    }
}

#[test]
fn test_verify_rejects_oversized_hash() {
    let (_, r, s) = SIGNATURE_VECTORS[0];
    assert!(matches!(
        verify(&int(PUBLIC_KEY_X), &int(&"f".repeat(67)), &int(r), &int(s)),
        Err(ApiError::InvalidMessageHash { .. })
    ));
}

#[test]
fn test_verify_rejects_out_of_range_components() {
    let pk = int(PUBLIC_KEY_X);
    let (h, r, s) = SIGNATURE_VECTORS[0];
    let (h, r, s) = (int(h), int(r), int(s));

    for (bad_r, bad_s) in [
        (vec![0u8], s.clone()),
        (r.clone(), vec![0u8]),
        (int(ELEMENT_BOUND), s.clone()),
        (r.clone(), int(ELEMENT_BOUND)),
        (vec![0x01; 33], s.clone()),
    ] {
        assert!(matches!(
            verify(&pk, &h, &bad_r, &bad_s),
            Err(ApiError::InvalidSignature { .. })
        ));
    }
}

/* ------------------------------------------------------------------------- */
/*                                Typed layer                                */
/* ------------------------------------------------------------------------- */

#[test]
fn test_public_key_encodings() {
    let pk = StarkPublicKey::from_x(&int(PUBLIC_KEY_X)).unwrap();
    assert_eq!(to_hex(&pk.y_bytes()), PUBLIC_KEY_Y);

    let from_compressed = StarkPublicKey::from_sec1(&pk.to_compressed()).unwrap();
    let from_uncompressed = StarkPublicKey::from_sec1(&pk.to_uncompressed()).unwrap();
    assert_eq!(from_compressed.point(), pk.point());
    assert_eq!(from_uncompressed.point(), pk.point());

    assert!(matches!(
        StarkPublicKey::from_sec1(&[0x00]),
        Err(ApiError::InvalidPublicKey { .. })
    ));
    assert!(matches!(
        StarkPublicKey::from_point(ec::Point::identity()),
        Err(ApiError::InvalidPublicKey { .. })
    ));
    assert!(matches!(
        StarkPublicKey::from_coordinates(&int(PUBLIC_KEY_X), &[1]),
        Err(ApiError::InvalidPublicKey { .. })
    ));
}

#[test]
fn test_signature_bytes() {
    let (_, r, s) = SIGNATURE_VECTORS[1];
    let sig = StarkSignature::from_components(&int(r), &int(s)).unwrap();
    let bytes = sig.to_bytes();
    assert_eq!(to_hex(&bytes[..32]), r);
    assert_eq!(to_hex(&bytes[32..]), s);
    assert_eq!(StarkSignature::from_bytes(&bytes).unwrap(), sig);

    assert!(matches!(
        StarkSignature::from_bytes(&bytes[..63]),
        Err(ApiError::InvalidLength { .. })
    ));
    assert!(matches!(
        StarkSignature::from_bytes(&[0u8; 64]),
        Err(ApiError::InvalidSignature { .. })
    ));
}

#[test]
fn test_secret_material_is_redacted() {
    let sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    let nonce = Nonce::from_bytes(&[2]).unwrap();
    assert!(!format!("{sk:?}").contains("c1e9"));
    assert!(format!("{sk:?}").contains("REDACTED"));
    assert!(format!("{nonce:?}").contains("REDACTED"));
    assert_eq!(to_hex(&sk.to_bytes()[..]), PRIVATE_KEY);
}

/* ------------------------------------------------------------------------- */
/*                               Trait surface                               */
/* ------------------------------------------------------------------------- */

#[test]
fn test_signature_trait_round_trip() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    let keypair = <StarkEcdsa as SignatureTrait>::keypair(&mut rng).unwrap();
    let pk = <StarkEcdsa as SignatureTrait>::public_key(&keypair);
    let sk = <StarkEcdsa as SignatureTrait>::secret_key(&keypair);

    let message = int("0123456789abcdef0123456789abcdef");
    let sig = <StarkEcdsa as SignatureTrait>::sign(&message, &sk).unwrap();
    assert!(<StarkEcdsa as SignatureTrait>::verify(&message, &sig, &pk).is_ok());

    let other = int("0123456789abcdef0123456789abcdee");
    assert!(matches!(
        <StarkEcdsa as SignatureTrait>::verify(&other, &sig, &pk),
        Err(ApiError::InvalidSignature { .. })
    ));
    assert_eq!(<StarkEcdsa as SignatureTrait>::name(), "ECDSA-STARK");
}

#[test]
fn test_signature_trait_rejects_wide_digest() {
    let sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    assert!(matches!(
        <StarkEcdsa as SignatureTrait>::sign(&[0xff; 32], &sk),
        Err(ApiError::InvalidMessageHash { .. })
    ));
}

#[test]
fn test_signature_serialize() {
    let sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    let pk = StarkEcdsa::get_public_key(&sk).unwrap();
    let hash = MessageHash::from_bytes(&int(SIGNATURE_VECTORS[2].0)).unwrap();
    let sig = StarkEcdsa::sign(&sk, &hash, None).unwrap();

    let pk_bytes = StarkEcdsa::serialize_public_key(&pk);
    assert_eq!(pk_bytes.len(), StarkEcdsa::PUBLIC_KEY_SIZE);
    assert_eq!(StarkEcdsa::deserialize_public_key(&pk_bytes).unwrap(), pk);

    let sk_bytes = StarkEcdsa::serialize_secret_key(&sk);
    assert_eq!(sk_bytes.len(), StarkEcdsa::SECRET_KEY_SIZE);
    let sk2 = StarkEcdsa::deserialize_secret_key(&sk_bytes).unwrap();
    assert_eq!(*sk2.to_bytes(), *sk.to_bytes());

    let sig_bytes = StarkEcdsa::serialize_signature(&sig);
    assert_eq!(sig_bytes.len(), StarkEcdsa::SIGNATURE_SIZE);
    assert_eq!(StarkEcdsa::deserialize_signature(&sig_bytes).unwrap(), sig);

    assert!(matches!(
        StarkEcdsa::deserialize_public_key(&pk_bytes[1..]),
        Err(ApiError::InvalidLength { .. })
    ));
    assert!(matches!(
        StarkEcdsa::deserialize_secret_key(&sk_bytes[1..]),
        Err(ApiError::InvalidLength { .. })
    ));
}
