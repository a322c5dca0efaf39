//! Reference vectors for ECDSA over the STARK curve

/// Decode a big-endian hex integer, tolerating an odd number of digits
pub fn int(s: &str) -> Vec<u8> {
    let padded = if s.len() % 2 == 1 {
        format!("0{s}")
    } else {
        s.to_string()
    };
    hex::decode(padded).expect("test vector is valid hex")
}

/// Private key shared by [`SIGNATURES`]
pub const PRIVATE_KEY: &str = "03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc";

/// x-coordinate of `PRIVATE_KEY · G`
pub const PUBLIC_KEY: &str = "077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43";

/// (message hash, r, s) deterministic signatures under [`PRIVATE_KEY`]
pub const SIGNATURES: &[(&str, &str, &str)] = &[
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

/// (public key x, message hash, r, s, expected verification result)
pub const VERIFICATIONS: &[(&str, &str, &str, &str, bool)] = &[
    (
        "01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca",
        "2",
        "0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20",
        "0405c3191ab3883ef2b763af35bc5f5d15b3b4e99461d70e84c654a351a7c81b",
        true,
    ),
    (
        "077a4b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43",
        "0397e76d1667c4454bfb83514e120583af836f8e32a516765497823eabe16a3f",
        "0173fd03d8b008ee7432977ac27d1e9d1a1f6c98b1a2f05fa84a21c84c44e882",
        "01f2c44a7798f55192f153b4c48ea5c1241fbb69e6132cc8a0da9c5b62a4286e",
        false,
    ),
];
