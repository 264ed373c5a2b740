// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use proptest::collection::vec;
use proptest::prelude::*;
use rstest::rstest;

use super::{DecodedMultihash, decode, encode};
use crate::Error;
use crate::registry::{FUNCTIONS, SHA1, SHA2_256};

const SHA1_DIGEST: [u8; 20] = [
    0xf7, 0xff, 0x9e, 0x8b, 0x7b, 0xb2, 0xe0, 0x9b, 0x70, 0x93, 0x5a, 0x5d, 0x78, 0x5e, 0x0c, 0xc5,
    0xd9, 0xd0, 0xab, 0xf0,
];

#[rstest]
fn test_encode_sha1() {
    let encoded = encode(&SHA1_DIGEST, SHA1, None, None).expect("valid sha1 digest");
    assert_eq!(&encoded[..2], &[0x11, 0x14]);
    assert_eq!(&encoded[2..], &SHA1_DIGEST);

    let decoded = decode(&encoded).expect("should decode what was encoded");
    assert_eq!(decoded.code(), 17);
    assert_eq!(decoded.length(), 20);
    assert_eq!(decoded.name(), Some("sha1"));
    assert_eq!(decoded.digest(), &SHA1_DIGEST);
    assert!(!decoded.is_truncated());
}

#[rstest]
fn test_encode_sha1_truncated() {
    let encoded = encode(&SHA1_DIGEST, SHA1, Some(10), None).expect("truncation is allowed");
    assert_eq!(&encoded[..2], &[0x11, 0x0a]);
    assert_eq!(&encoded[2..], &SHA1_DIGEST[..10]);

    let decoded = decode(&encoded).expect("truncated digest should decode");
    assert_eq!(decoded.digest(), &SHA1_DIGEST[..10]);
    assert!(decoded.is_truncated());
}

#[rstest]
#[case(0)]
#[case(19)]
#[case(21)]
#[case(32)]
fn test_encode_sha1_wrong_length(#[case] len: usize) {
    let digest = vec![0u8; len];
    let err = encode(&digest, SHA1, None, None).expect_err("sha1 digests must be 20 bytes");
    assert_eq!(
        err,
        Error::DigestLengthMismatch {
            name: "sha1",
            actual: len,
            expected: 20
        }
    );
}

#[rstest]
fn test_encode_name_must_match_code() {
    encode(&SHA1_DIGEST, SHA1, None, Some("sha1")).expect("matching name is accepted");
    let err = encode(&SHA1_DIGEST, SHA1, None, Some("sha2-256")).expect_err("mismatched name");
    assert_eq!(
        err,
        Error::NameCodeMismatch {
            name: "sha2-256".to_string(),
            code: SHA1,
            expected: "sha1",
        }
    );
}

#[rstest]
fn test_encode_name_ignored_for_app_code() {
    let encoded = encode(&[1, 2, 3], 0x05, None, Some("anything"))
        .expect("app specific codes have no canonical name to compare");
    assert_eq!(encoded, vec![0x05, 0x03, 1, 2, 3]);
}

#[rstest]
fn test_encode_first_non_app_code_is_invalid() {
    let err = encode(&[1, 2, 3], 0x10, None, None).expect_err("0x10 is not registered");
    assert_eq!(err, Error::InvalidCode { code: 0x10 });
}

#[rstest]
fn test_encode_name_with_invalid_code() {
    // there is no registered name to compare against, so the code is reported
    let err = encode(&[1, 2, 3], 0x10, None, Some("sha1")).expect_err("0x10 is not registered");
    assert_eq!(err, Error::InvalidCode { code: 0x10 });
}

#[rstest]
#[case(vec![])]
#[case(vec![0x11])]
#[case(vec![0x11, 0x00])]
#[case(vec![0x05; 130])]
fn test_decode_buffer_length_out_of_range(#[case] buf: Vec<u8>) {
    let err = decode(&buf).expect_err("buffer length is out of range");
    assert_eq!(err, Error::BufferLengthOutOfRange { len: buf.len() });
}

#[rstest]
fn test_decode_invalid_code_before_length() {
    // the declared length is also wrong, but the code is reported first
    let err = decode(&[0x10, 0x09, 0x00]).expect_err("0x10 is not registered");
    assert_eq!(err, Error::InvalidCode { code: 0x10 });
}

#[rstest]
fn test_decode_length_mismatch() {
    let err = decode(&[SHA1, 0x03, 0xaa, 0xbb]).expect_err("declared length is wrong");
    assert_eq!(
        err,
        Error::LengthMismatch {
            declared: 3,
            actual: 2
        }
    );
}

#[rstest]
fn test_decode_longer_than_conventional() {
    let mut buf = vec![SHA1, 21];
    buf.extend_from_slice(&[0; 21]);
    let err = decode(&buf).expect_err("sha1 digests can't be longer than 20 bytes");
    assert_eq!(
        err,
        Error::LengthExceedsConventional {
            name: "sha1",
            actual: 21,
            conventional: 20
        }
    );
}

#[rstest]
#[case(1)]
#[case(64)]
#[case(127)]
fn test_app_code_any_length(#[case] len: usize) {
    let digest = vec![0x5a; len];
    let encoded = encode(&digest, 0x05, None, None).expect("app code accepts any length");
    let decoded = decode(&encoded).expect("app code decodes");
    assert_eq!(decoded.code(), 0x05);
    assert_eq!(decoded.name(), None);
    assert!(decoded.is_app_specific());
    assert!(!decoded.is_truncated());
    assert_eq!(decoded.digest(), digest.as_slice());
}

#[rstest]
fn test_round_trip_every_registered_function() {
    for function in FUNCTIONS {
        let digest: Vec<u8> = (0..function.size).collect();
        let encoded = encode(&digest, function.code, None, Some(function.name))
            .expect("conventional length digest should encode");
        let decoded = decode(&encoded).expect("should decode");
        assert_eq!(decoded.code(), function.code);
        assert_eq!(usize::from(decoded.length()), digest.len());
        assert_eq!(decoded.name(), Some(function.name));
        assert_eq!(decoded.function(), Some(function));
        assert_eq!(decoded.to_bytes(), encoded);
    }
}

#[rstest]
fn test_decoded_into_bytes() {
    let encoded = encode(&SHA1_DIGEST, SHA1, Some(6), None).unwrap();
    let decoded = decode(&encoded).unwrap();

    let bytes: Vec<u8> = decoded.clone().into();
    assert_eq!(bytes, encoded, "should convert back into the encoded form");
    assert_eq!(decoded.into_digest(), SHA1_DIGEST[..6].to_vec());
}

#[rstest]
fn test_hex_display_and_parse() {
    let encoded = encode(&SHA1_DIGEST, SHA1, Some(4), None).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.to_string(), "1104f7ff9e8b");

    let parsed: DecodedMultihash = "1104F7FF9E8B".parse().expect("hex case is not significant");
    assert_eq!(parsed, decoded);

    let err = DecodedMultihash::parse("1104f7ff9e8").expect_err("odd number of hex digits");
    assert!(matches!(err, Error::InvalidHex { .. }), "{err:?}");
}

#[rstest]
fn test_serde_as_hex_string() {
    let decoded = DecodedMultihash::try_from([SHA2_256, 0x01, 0xee].as_slice()).unwrap();
    let json = serde_json::to_string(&decoded).unwrap();
    assert_eq!(json, "\"1201ee\"");
    let back: DecodedMultihash = serde_json::from_str(&json).unwrap();
    assert_eq!(back, decoded);

    serde_json::from_str::<DecodedMultihash>("\"1000\"").expect_err("too short to decode");
}

proptest! {
    /// Any truncation of a full digest decodes back
    /// to exactly that prefix of the digest.
    #[test]
    fn prop_truncated_digest_is_prefix(
            index in 0..FUNCTIONS.len(),
            seed in vec(any::<u8>(), 64),
            cut in 1usize..=64) {
        let function = &FUNCTIONS[index];
        let digest = &seed[..usize::from(function.size)];
        let length = cut.min(digest.len());
        let encoded = encode(digest, function.code, Some(length), None).unwrap();
        prop_assert_eq!(encoded.len(), length + 2);
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(decoded.digest(), &digest[..length]);
    }

    /// Decoding never panics, whatever the input.
    #[test]
    fn prop_decode_arbitrary_bytes(buf in vec(any::<u8>(), 0..140)) {
        if let Ok(decoded) = decode(&buf) {
            prop_assert_eq!(decoded.to_bytes(), buf);
        }
    }
}
