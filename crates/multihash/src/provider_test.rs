// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use ring::digest;
use rstest::rstest;

use super::{HashProvider, hash_and_encode};
use crate::registry::{BLAKE2B, SHA1, SHA2_256, SHA2_512};
use crate::{Error, decode};

/// Supplies the functions that ring implements
struct RingProvider;

impl HashProvider for RingProvider {
    fn digest(&self, code: u8, data: &[u8]) -> Option<Vec<u8>> {
        let algorithm = match code {
            SHA1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
            SHA2_256 => &digest::SHA256,
            SHA2_512 => &digest::SHA512,
            _ => return None,
        };
        Some(digest::digest(algorithm, data).as_ref().to_vec())
    }
}

#[rstest]
#[case(SHA1, "sha1")]
#[case(SHA2_256, "sha2-256")]
#[case(SHA2_512, "sha2-512")]
fn test_ring_provider(#[case] code: u8, #[case] name: &str) {
    let encoded = hash_and_encode(&RingProvider, b"hello world", code, None)
        .expect("ring supports this function");
    let decoded = decode(&encoded).expect("should decode");
    assert_eq!(decoded.name(), Some(name));
    assert_eq!(
        decoded.digest(),
        RingProvider.digest(code, b"hello world").unwrap().as_slice()
    );
}

#[rstest]
fn test_known_sha1_of_empty_input() {
    let encoded = hash_and_encode(&RingProvider, b"", SHA1, Some(4)).unwrap();
    assert_eq!(encoded, vec![0x11, 0x04, 0xda, 0x39, 0xa3, 0xee]);
}

#[rstest]
fn test_unsupported_function() {
    let err = hash_and_encode(&RingProvider, b"data", BLAKE2B, None)
        .expect_err("ring has no blake2b");
    assert_eq!(err, Error::UnsupportedFunction { code: BLAKE2B });
}

#[rstest]
fn test_closure_provider_with_wrong_size_is_rejected() {
    let short = |_code: u8, data: &[u8]| Some(data.to_vec());
    let err = hash_and_encode(&short, b"abc", SHA2_256, None).expect_err("too short for sha2-256");
    assert!(matches!(err, Error::DigestLengthMismatch { .. }), "{err:?}");

    let encoded = hash_and_encode(&short, b"abc", 0x01, None).expect("app codes take anything");
    assert_eq!(encoded, vec![0x01, 0x03, b'a', b'b', b'c']);
}
