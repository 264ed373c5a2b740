// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Result, encode};

#[cfg(test)]
#[path = "./provider_test.rs"]
mod provider_test;

/// A HashProvider computes digests on behalf of the codec.
///
/// This crate never hashes anything itself, callers plug in
/// whichever implementations of the registered functions they have.
pub trait HashProvider {
    /// Compute the digest of `data` with the function identified by `code`.
    ///
    /// Returns `None` if this provider does not support the function.
    fn digest(&self, code: u8, data: &[u8]) -> Option<Vec<u8>>;
}

impl<F> HashProvider for F
where
    F: Fn(u8, &[u8]) -> Option<Vec<u8>>,
{
    fn digest(&self, code: u8, data: &[u8]) -> Option<Vec<u8>> {
        self(code, data)
    }
}

/// Hash `data` with the given provider and encode the result,
/// optionally truncating it to `length` bytes.
pub fn hash_and_encode<P>(provider: &P, data: &[u8], code: u8, length: Option<usize>) -> Result<Vec<u8>>
where
    P: HashProvider + ?Sized,
{
    let digest = provider
        .digest(code, data)
        .ok_or(Error::UnsupportedFunction { code })?;
    encode(&digest, code, length, None)
}
