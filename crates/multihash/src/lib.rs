// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

//! Self-describing hash digests.
//!
//! A multihash is a hash digest prefixed with two bytes: the code of
//! the hash function that produced it and the length of the digest.
//! This crate only packs and unpacks that structure, computing
//! digests is left to the caller (see [`HashProvider`]).

mod error;
mod multihash;
mod provider;
pub mod registry;
mod validate;

pub use error::{Error, Result};
pub use multihash::{DecodedMultihash, decode, encode};
pub use provider::{HashProvider, hash_and_encode};
pub use registry::{BLAKE2B, BLAKE2S, HashFunction, SHA1, SHA2_256, SHA2_512, SHA3};
pub use validate::{
    APP_CODE_LIMIT, MAX_BUFFER_LENGTH, MAX_DIGEST_LENGTH, MIN_BUFFER_LENGTH, MIN_DIGEST_LENGTH,
    is_app_code, is_valid_code, validate_decoded, validate_for_encode,
};
