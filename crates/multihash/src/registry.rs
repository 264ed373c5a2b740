// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt::Display;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

pub const SHA1: u8 = 0x11;
pub const SHA2_256: u8 = 0x12;
pub const SHA2_512: u8 = 0x13;
pub const SHA3: u8 = 0x14;
pub const BLAKE2B: u8 = 0x40;
pub const BLAKE2S: u8 = 0x41;

/// A hash function known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HashFunction {
    /// The one byte code that identifies this function in a multihash
    pub code: u8,
    /// The canonical name of this function, eg: "sha2-256"
    pub name: &'static str,
    /// The conventional byte length of digests produced by this function
    pub size: u8,
}

/// Every registered hash function, ordered by code.
///
/// Both directions of lookup are generated from this one table.
pub const FUNCTIONS: &[HashFunction] = &[
    HashFunction {
        code: SHA1,
        name: "sha1",
        size: 20,
    },
    HashFunction {
        code: SHA2_256,
        name: "sha2-256",
        size: 32,
    },
    HashFunction {
        code: SHA2_512,
        name: "sha2-512",
        size: 64,
    },
    HashFunction {
        code: SHA3,
        name: "sha3",
        size: 64,
    },
    HashFunction {
        code: BLAKE2B,
        name: "blake2b",
        size: 64,
    },
    HashFunction {
        code: BLAKE2S,
        name: "blake2s",
        size: 32,
    },
];

static BY_CODE: Lazy<BTreeMap<u8, &'static HashFunction>> =
    Lazy::new(|| FUNCTIONS.iter().map(|f| (f.code, f)).collect());

static BY_NAME: Lazy<BTreeMap<&'static str, &'static HashFunction>> =
    Lazy::new(|| FUNCTIONS.iter().map(|f| (f.name, f)).collect());

/// Find the registered hash function with the given code.
pub fn lookup(code: u8) -> Option<&'static HashFunction> {
    BY_CODE.get(&code).copied()
}

/// Find the registered hash function with the given name.
pub fn lookup_name(name: &str) -> Option<&'static HashFunction> {
    BY_NAME.get(name).copied()
}

/// The canonical name of a registered code.
pub fn name_of(code: u8) -> Option<&'static str> {
    lookup(code).map(|f| f.name)
}

/// The code registered under a name.
pub fn code_of(name: &str) -> Option<u8> {
    lookup_name(name).map(|f| f.code)
}

/// The conventional digest length of a registered code, in bytes.
pub fn conventional_length(code: u8) -> Option<u8> {
    lookup(code).map(|f| f.size)
}

/// Iterate all registered hash functions in code order.
pub fn functions() -> impl Iterator<Item = &'static HashFunction> {
    BY_CODE.values().copied()
}

impl Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

impl std::str::FromStr for HashFunction {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        lookup_name(name)
            .copied()
            .ok_or_else(|| Error::UnknownFunctionName(name.to_owned()))
    }
}
