//! Integration tests for ECDSA over the STARK curve

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use starksig::prelude::*;
use starksig::sign::traditional::ecdsa::stark;
use starksig_tests::vectors::{int, PRIVATE_KEY, PUBLIC_KEY, SIGNATURES, VERIFICATIONS};

#[test]
fn test_reference_signatures() {
    let d = int(PRIVATE_KEY);
    assert_eq!(hex::encode(stark::get_public_key(&d).unwrap()), PUBLIC_KEY);

    for (h, r_hex, s_hex) in SIGNATURES {
        let (r, s) = stark::sign(&d, &int(h), None).unwrap();
        assert_eq!(hex::encode(r), *r_hex);
        assert_eq!(hex::encode(s), *s_hex);
        assert!(stark::verify(&int(PUBLIC_KEY), &int(h), &r, &s).unwrap());
    }
}

#[test]
fn test_reference_verifications() {
    for (pk, h, r, s, expected) in VERIFICATIONS {
        let result = stark::verify(&int(pk), &int(h), &int(r), &int(s)).unwrap();
        assert_eq!(result, *expected, "unexpected result for hash {h}");
    }
}

#[test]
fn test_typed_and_integer_layers_agree() {
    let d = int(PRIVATE_KEY);
    let sk = StarkSecretKey::from_bytes(&d).unwrap();
    let pk = StarkEcdsa::get_public_key(&sk).unwrap();
    assert_eq!(pk.x_bytes().to_vec(), stark::get_public_key(&d).unwrap().to_vec());

    for (h, _, _) in SIGNATURES {
        let hash = MessageHash::from_bytes(&int(h)).unwrap();
        let typed = StarkEcdsa::sign(&sk, &hash, None).unwrap();
        let (r, s) = stark::sign(&d, &int(h), None).unwrap();
        assert_eq!(typed.r(), &r);
        assert_eq!(typed.s(), &s);
    }
}

#[test]
fn test_signature_trait_flow() {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let (public_key, secret_key) = StarkEcdsa::keypair(&mut rng).unwrap();

    let message = int("0206b9e486e0af1e1e7357493196efc420c8f57d3d7c0d4c26e7f96f0f5c3427");
    let signature = <StarkEcdsa as Signature>::sign(&message, &secret_key).unwrap();
    assert!(<StarkEcdsa as Signature>::verify(&message, &signature, &public_key).is_ok());

    // Round trip every artifact through its byte encoding
    let pk = StarkEcdsa::deserialize_public_key(&StarkEcdsa::serialize_public_key(&public_key))
        .unwrap();
    let sig = StarkEcdsa::deserialize_signature(&StarkEcdsa::serialize_signature(&signature))
        .unwrap();
    assert!(<StarkEcdsa as Signature>::verify(&message, &sig, &pk).is_ok());

    let modified = int("0206b9e486e0af1e1e7357493196efc420c8f57d3d7c0d4c26e7f96f0f5c3428");
    assert!(<StarkEcdsa as Signature>::verify(&modified, &signature, &public_key).is_err());
}

#[test]
fn test_error_kinds() {
    let d = int(PRIVATE_KEY);
    let (h, r, s) = SIGNATURES[0];

    assert!(matches!(
        stark::sign(&[0], &int(h), None),
        Err(Error::InvalidPrivateKey { .. })
    ));
    assert!(matches!(
        stark::sign(&d, &int(&"f".repeat(67)), None),
        Err(Error::InvalidMessageHash { .. })
    ));
    assert!(matches!(
        stark::verify(&int("5"), &int(h), &int(r), &int(s)),
        Err(Error::InvalidPublicKey { .. })
    ));
    assert!(matches!(
        stark::verify(&int(PUBLIC_KEY), &int(h), &[0], &int(s)),
        Err(Error::InvalidSignature { .. })
    ));
}

#[test]
fn test_public_key_derivation_is_injective() {
    let one = stark::get_public_key(&[1]).unwrap();
    let two = stark::get_public_key(&[2]).unwrap();
    let d = stark::get_public_key(&int(PRIVATE_KEY)).unwrap();
    assert_ne!(one, two);
    assert_ne!(one, d);
    assert_ne!(two, d);

    // Only x is kept, so d and n - d collide by construction
    let negated =
        stark::get_public_key(&int("043e16aaf1996a8e692ee49f0717185809e80565d081dc3ab93a57d525f16963"))
            .unwrap();
    assert_eq!(negated, d);
}

#[test]
fn test_secret_key_zeroize_through_facade() {
    use starksig::zeroize::Zeroize;

    let mut sk = StarkSecretKey::from_bytes(&int(PRIVATE_KEY)).unwrap();
    sk.zeroize();
    assert!(sk.to_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_signed_limit_order() {
    use stark::message::{get_limit_order_msg_hash, LimitOrderMsg};

    let token_sell = int("5fa3383597691ea9d827a79e1a4f0f7989c35ced18ca9619de8ab97e661020");
    let token_buy = int("774961c824a3b0fb3d2965f01471c9c7734bf8dbde659e0c08dca2ef18d56a");
    let order = LimitOrderMsg {
        vault_sell: 21,
        vault_buy: 27,
        amount_sell: 2154686749748910716,
        amount_buy: 1470242115489520459,
        token_sell: &token_sell,
        token_buy: &token_buy,
        nonce: 0,
        expiration_timestamp: 438953,
    };
    let digest = get_limit_order_msg_hash(&order).unwrap();
    assert_eq!(
        hex::encode(digest),
        "0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f"
    );

    let d = int(PRIVATE_KEY);
    let (r, s) = stark::sign(&d, &digest, None).unwrap();
    assert!(stark::verify(&int(PUBLIC_KEY), &digest, &r, &s).unwrap());
}
