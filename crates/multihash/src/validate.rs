// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use crate::registry;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./validate_test.rs"]
mod validate_test;

/// Codes below this value are reserved for application specific use
pub const APP_CODE_LIMIT: u8 = 0x10;
/// The smallest digest that can be held in a multihash
pub const MIN_DIGEST_LENGTH: usize = 1;
/// The largest digest that can be held in a multihash
pub const MAX_DIGEST_LENGTH: usize = 127;
/// The smallest valid encoded multihash (code, length, one digest byte)
pub const MIN_BUFFER_LENGTH: usize = MIN_DIGEST_LENGTH + 2;
/// The largest valid encoded multihash
pub const MAX_BUFFER_LENGTH: usize = MAX_DIGEST_LENGTH + 2;

/// Check if the code is an application specific code.
///
/// ```
/// assert!(multihash::is_app_code(0));
/// assert!(!multihash::is_app_code(multihash::SHA1));
/// ```
pub fn is_app_code(code: u8) -> bool {
    code < APP_CODE_LIMIT
}

/// Check if the code is either application specific or registered.
///
/// ```
/// assert!(multihash::is_valid_code(multihash::SHA1));
/// assert!(multihash::is_valid_code(0));
/// assert!(!multihash::is_valid_code(0x10));
/// ```
pub fn is_valid_code(code: u8) -> bool {
    is_app_code(code) || registry::lookup(code).is_some()
}

/// Check the fields of a multihash that was read from a buffer.
///
/// The digest may be shorter than the registered length of its
/// function (truncated) but never longer.
pub fn validate_decoded(code: u8, declared_length: u8, digest: &[u8]) -> Result<()> {
    if !is_valid_code(code) {
        return Err(Error::InvalidCode { code });
    }
    let actual = digest.len();
    if usize::from(declared_length) != actual {
        return Err(Error::LengthMismatch {
            declared: declared_length,
            actual,
        });
    }
    if let Some(function) = registry::lookup(code) {
        if actual > usize::from(function.size) {
            return Err(Error::LengthExceedsConventional {
                name: function.name,
                actual,
                conventional: function.size,
            });
        }
    }
    Ok(())
}

/// Check that a digest can be encoded under the given code,
/// returning the length that the encoded digest will have.
///
/// Registered functions must be given their full digest, only the
/// encoded form may be truncated by requesting a shorter `length`.
pub fn validate_for_encode(digest: &[u8], code: u8, length: Option<usize>) -> Result<usize> {
    if !is_valid_code(code) {
        return Err(Error::InvalidCode { code });
    }
    let actual = digest.len();
    if let Some(function) = registry::lookup(code) {
        if actual != usize::from(function.size) {
            return Err(Error::DigestLengthMismatch {
                name: function.name,
                actual,
                expected: function.size,
            });
        }
    }
    if let Some(requested) = length {
        if requested > actual {
            return Err(Error::RequestedLengthTooLarge { requested, actual });
        }
    }
    let effective = length.unwrap_or(actual);
    if !(MIN_DIGEST_LENGTH..=MAX_DIGEST_LENGTH).contains(&effective) {
        return Err(Error::IllegalDigestLength { len: effective });
    }
    Ok(effective)
}
