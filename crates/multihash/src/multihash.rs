// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use serde::{Deserialize, Serialize};

use crate::registry::{self, HashFunction};
use crate::validate::{
    MAX_BUFFER_LENGTH, MIN_BUFFER_LENGTH, is_app_code, validate_decoded, validate_for_encode,
};
use crate::{Error, Result};

#[cfg(test)]
#[path = "./multihash_test.rs"]
mod multihash_test;

/// Encode a hash `digest` along with the one byte function `code`.
///
/// The encoded digest is truncated to `length` bytes when given,
/// otherwise the whole digest is used. Digests of registered
/// functions must have the full conventional length of that function.
///
/// `name` is redundant, but when given for a registered code it
/// must match that code's canonical name.
///
/// ```
/// let digest = [0xab; 20];
/// let encoded = multihash::encode(&digest, multihash::SHA1, Some(10), Some("sha1")).unwrap();
/// assert_eq!(&encoded[..2], &[0x11, 0x0a]);
/// assert_eq!(&encoded[2..], &digest[..10]);
/// ```
pub fn encode(digest: &[u8], code: u8, length: Option<usize>, name: Option<&str>) -> Result<Vec<u8>> {
    if let (Some(name), Some(function)) = (name, registry::lookup(code)) {
        if name != function.name {
            return Err(Error::NameCodeMismatch {
                name: name.to_owned(),
                code,
                expected: function.name,
            });
        }
    }
    let effective = validate_for_encode(digest, code, length)?;
    let mut buf = Vec::with_capacity(effective + 2);
    buf.push(code);
    // validation guarantees that this fits in a single byte
    buf.push(effective as u8);
    buf.extend_from_slice(&digest[..effective]);
    Ok(buf)
}

/// Decode a multihash buffer, checking the code and length
/// prefix bytes against the digest in the rest of the buffer.
///
/// ```
/// let decoded = multihash::decode(&[0x11, 0x02, 0xf7, 0xff]).unwrap();
/// assert_eq!(decoded.name(), Some("sha1"));
/// assert_eq!(decoded.length(), 2);
/// assert_eq!(decoded.digest(), &[0xf7, 0xff]);
/// ```
pub fn decode(buf: &[u8]) -> Result<DecodedMultihash> {
    if !(MIN_BUFFER_LENGTH..=MAX_BUFFER_LENGTH).contains(&buf.len()) {
        return Err(Error::BufferLengthOutOfRange { len: buf.len() });
    }
    let (code, length, digest) = (buf[0], buf[1], &buf[2..]);
    let function = registry::lookup(code);
    if function.is_none() && !is_app_code(code) {
        return Err(Error::InvalidCode { code });
    }
    validate_decoded(code, length, digest)?;
    Ok(DecodedMultihash {
        code,
        length,
        function,
        digest: digest.to_vec(),
    })
}

/// The validated fields of an encoded multihash.
///
/// Instances can only be created by decoding a buffer, so every
/// value is known to be consistent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedMultihash {
    code: u8,
    length: u8,
    function: Option<&'static HashFunction>,
    digest: Vec<u8>,
}

impl DecodedMultihash {
    /// The hash function code
    pub fn code(&self) -> u8 {
        self.code
    }

    /// The declared length of the digest, which always
    /// matches the number of digest bytes
    pub fn length(&self) -> u8 {
        self.length
    }

    /// The canonical function name, or none for application specific codes
    pub fn name(&self) -> Option<&'static str> {
        self.function.map(|f| f.name)
    }

    /// The registry entry for this code, if any
    pub fn function(&self) -> Option<&'static HashFunction> {
        self.function
    }

    /// Yields a view of the digest bytes
    pub fn digest(&self) -> &[u8] {
        self.digest.as_slice()
    }

    /// Extract the digest bytes
    pub fn into_digest(self) -> Vec<u8> {
        self.digest
    }

    pub fn is_app_specific(&self) -> bool {
        is_app_code(self.code)
    }

    /// True if the digest is shorter than its function's conventional length.
    ///
    /// Application specific digests are never considered truncated.
    pub fn is_truncated(&self) -> bool {
        self.function
            .map(|f| self.digest.len() < usize::from(f.size))
            .unwrap_or(false)
    }

    /// Re-assemble the encoded multihash that this value was decoded from.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.digest.len() + 2);
        buf.push(self.code);
        buf.push(self.length);
        buf.extend_from_slice(&self.digest);
        buf
    }

    /// Parse a hex encoded multihash.
    pub fn parse<S: AsRef<str>>(source: S) -> Result<Self> {
        let source = source.as_ref();
        let bytes = HEXLOWER_PERMISSIVE
            .decode(source.as_bytes())
            .map_err(|err| Error::InvalidHex {
                reason: err.to_string(),
                given: source.to_owned(),
            })?;
        decode(&bytes)
    }
}

impl TryFrom<&[u8]> for DecodedMultihash {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        decode(buf)
    }
}

impl std::str::FromStr for DecodedMultihash {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse(source)
    }
}

impl Display for DecodedMultihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&HEXLOWER.encode(&self.to_bytes()))
    }
}

impl From<DecodedMultihash> for Vec<u8> {
    fn from(decoded: DecodedMultihash) -> Self {
        decoded.to_bytes()
    }
}

impl Serialize for DecodedMultihash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

impl<'de> Deserialize<'de> for DecodedMultihash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        /// Visits a serialized string, decoding it as a multihash
        struct StringVisitor;
        impl serde::de::Visitor<'_> for StringVisitor {
            type Value = DecodedMultihash;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("hex encoded multihash")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<DecodedMultihash, E>
            where
                E: serde::de::Error,
            {
                DecodedMultihash::parse(value).map_err(|err| E::custom(err.to_string()))
            }
        }
        deserializer.deserialize_str(StringVisitor)
    }
}
