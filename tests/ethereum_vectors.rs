//! Vectors from the Ethereum RLP test suite (RLPTests/rlptest.json)

use rlpar::*;

const LOREM_55: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing eli";
const LOREM_56: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit";
const LOREM_1024: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Curabitur mauris magna, suscipit sed vehicula non, iaculis faucibus tortor. Proin suscipit ultricies malesuada. Duis tortor elit, dictum quis tristique eu, ultrices at risus. Morbi a est imperdiet mi ullamcorper aliquet suscipit nec lorem. Aenean quis leo mollis, vulputate elit varius, consequat enim. Nulla ultrices turpis justo, et posuere urna consectetur nec. Proin non convallis metus. Donec tempor ipsum in mauris congue sollicitudin. Vestibulum ante ipsum primis in faucibus orci luctus et ultrices posuere cubilia Curae; Suspendisse convallis sem vel massa faucibus, eget lacinia lacus tempor. Nulla quis ultricies purus. Proin auctor rhoncus nibh condimentum mollis. Aliquam consequat enim at metus luctus, a eleifend purus egestas. Curabitur at nibh metus. Nam bibendum, neque at auctor tristique, lorem libero aliquet arcu, non interdum tellus lectus sit amet eros. Cras rhoncus, metus ac ornare cursus, dolor justo ultrices metus, at ullamcorper volutpat";

fn unhex(input: &str) -> Vec<u8> {
    hex::decode(input).expect("valid hex fixture")
}

fn text(s: &str) -> Value {
    Value::from(s)
}

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

#[test]
fn test_strings() {
    let cases: [(&str, &[u8]); 8] = [
        ("80", b""),
        ("00", &[0x00]),
        ("01", &[0x01]),
        ("7f", &[0x7f]),
        ("83646f67", b"dog"),
        (
            "b74c6f72656d20697073756d20646f6c6f722073697420616d65742c20636f6e7365637465747572206164697069736963696e6720656c69",
            LOREM_55.as_bytes(),
        ),
        (
            "b8384c6f72656d20697073756d20646f6c6f722073697420616d65742c20636f6e7365637465747572206164697069736963696e6720656c6974",
            LOREM_56.as_bytes(),
        ),
        ("8180", &[0x80]),
    ];

    for (encoded, raw) in cases {
        let wire = unhex(encoded);
        assert_eq!(decode(&wire), Ok(Value::from(raw)), "decode {encoded}");
        assert_eq!(encode_bytes(raw), wire, "encode {encoded}");
    }
}

#[test]
fn test_long_string_with_two_length_bytes() {
    assert_eq!(LOREM_1024.len(), 1024);

    let encoded = encode_string(LOREM_1024);
    assert_eq!(&encoded[..3], &[0xb9, 0x04, 0x00]);
    assert_eq!(&encoded[3..], LOREM_1024.as_bytes());

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.to_utf8(), Some(LOREM_1024));
}

#[test]
fn test_integers() {
    let cases: [(&str, u64); 9] = [
        ("80", 0),
        ("01", 1),
        ("10", 16),
        ("4f", 79),
        ("7f", 127),
        ("8180", 128),
        ("8203e8", 1000),
        ("830186a0", 100_000),
        ("88ffffffffffffffff", u64::MAX),
    ];

    for (encoded, value) in cases {
        let wire = unhex(encoded);
        assert_eq!(encode_uint(value), wire, "encode {value}");
        assert_eq!(decode(&wire).unwrap().to_u64(), Some(value), "decode {encoded}");
    }
}

#[cfg(feature = "bigint")]
#[test]
fn test_big_integers() {
    use num_bigint::BigUint;

    let cases = [
        (
            "8f102030405060708090a0b0c0d0e0f2",
            "83729609699884896815286331701780722",
        ),
        (
            "9c0100020003000400050006000700080009000a000b000c000d000e01",
            "105315505618206987246253880190783558935785933862974822347068935681",
        ),
        (
            "a1010000000000000000000000000000000000000000000000000000000000000000",
            "115792089237316195423570985008687907853269984665640564039457584007913129639936",
        ),
    ];

    for (encoded, decimal) in cases {
        let value = BigUint::parse_bytes(decimal.as_bytes(), 10).unwrap();
        let wire = unhex(encoded);
        assert_eq!(encode_bigint(&value), wire);
        assert_eq!(decode(&wire).unwrap().to_biguint(), Some(value));
    }
}

#[test]
fn test_lists() {
    let asdf_qwer_zxcv = || list(vec![text("asdf"), text("qwer"), text("zxcv")]);

    let mut short_list_max = Vec::new();
    for _ in 0..3 {
        short_list_max.extend([text("asdf"), text("qwer"), text("zxcv")]);
    }
    short_list_max.extend([text("asdf"), text("qwer")]);

    let cases = vec![
        ("c0", list(vec![])),
        (
            "cc83646f6783676f6483636174",
            list(vec![text("dog"), text("god"), text("cat")]),
        ),
        (
            "c6827a77c10401",
            list(vec![
                text("zw"),
                list(vec![Value::ByteString(vec![0x04])]),
                Value::ByteString(vec![0x01]),
            ]),
        ),
        (
            "f784617364668471776572847a78637684617364668471776572847a78637684617364668471776572847a78637684617364668471776572",
            list(short_list_max),
        ),
        (
            "f840cf84617364668471776572847a786376cf84617364668471776572847a786376cf84617364668471776572847a786376cf84617364668471776572847a786376",
            list(vec![asdf_qwer_zxcv(), asdf_qwer_zxcv(), asdf_qwer_zxcv(), asdf_qwer_zxcv()]),
        ),
        (
            "c4c2c0c0c0",
            list(vec![list(vec![list(vec![]), list(vec![])]), list(vec![])]),
        ),
        (
            "c7c0c1c0c3c0c1c0",
            list(vec![
                list(vec![]),
                list(vec![list(vec![])]),
                list(vec![list(vec![]), list(vec![list(vec![])])]),
            ]),
        ),
        (
            "ecca846b6579318476616c31ca846b6579328476616c32ca846b6579338476616c33ca846b6579348476616c34",
            list(
                (1..=4)
                    .map(|n| list(vec![text(&format!("key{n}")), text(&format!("val{n}"))]))
                    .collect(),
            ),
        ),
    ];

    for (encoded, expected) in cases {
        let wire = unhex(encoded);
        assert_eq!(decode(&wire).as_ref(), Ok(&expected), "decode {encoded}");
        assert_eq!(expected.encode(), wire, "encode {encoded}");
    }
}

#[test]
fn test_eip155_transaction() {
    let wire = unhex(
        "f86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83",
    );

    let tx = decode(&wire).unwrap();
    let fields = tx.as_list().unwrap();
    assert_eq!(fields.len(), 9);

    assert_eq!(fields[0].to_u64(), Some(9));
    assert_eq!(fields[1].to_u64(), Some(20_000_000_000));
    assert_eq!(fields[2].to_u64(), Some(21_000));
    assert_eq!(fields[3].as_bytes(), Some(&[0x35u8; 20][..]));
    assert_eq!(fields[4].to_u64(), Some(1_000_000_000_000_000_000));
    assert_eq!(fields[5].as_bytes(), Some(&[][..]));
    assert_eq!(fields[6].to_u64(), Some(37));
    assert_eq!(
        fields[7].as_bytes(),
        Some(&unhex("28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276")[..])
    );
    assert_eq!(
        fields[8].as_bytes(),
        Some(&unhex("67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83")[..])
    );

    // Rebuild the transaction bottom-up from scalar encoders.
    let rebuilt = encode_array(&[
        encode_uint(9),
        encode_uint(20_000_000_000),
        encode_uint(21_000),
        encode_bytes(&[0x35; 20]),
        encode_uint(1_000_000_000_000_000_000),
        encode_bytes(&[]),
        encode_uint(37),
        encode_bytes(fields[7].as_bytes().unwrap()),
        encode_bytes(fields[8].as_bytes().unwrap()),
    ]);
    assert_eq!(rebuilt, wire);
}
