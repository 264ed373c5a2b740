// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

// Allow: the error fields that are used by the thiserror format string are
// still considered unused.
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Diagnostic, Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid multihash code {code:#04x}")]
    #[diagnostic(
        code("multihash::invalid_code"),
        help("Codes below 0x10 are application specific, anything else must be a registered hash function")
    )]
    InvalidCode { code: u8 },

    #[error("Illegal multihash value has length {len}, allowed range is 3 <= length <= 129")]
    #[diagnostic(code("multihash::buffer_length"))]
    BufferLengthOutOfRange { len: usize },

    #[error("Inconsistent digest length, header declares {declared} but {actual} bytes follow")]
    #[diagnostic(code("multihash::length_mismatch"))]
    LengthMismatch { declared: u8, actual: usize },

    #[error("Inconsistent length {actual} for input digest of type {name}, should be {expected}")]
    #[diagnostic(
        code("multihash::digest_length_mismatch"),
        help("Supply the full digest and request truncation with an explicit length instead")
    )]
    DigestLengthMismatch {
        name: &'static str,
        actual: usize,
        expected: u8,
    },

    #[error("Digest length {actual} is larger than {name}'s length {conventional}")]
    #[diagnostic(code("multihash::length_exceeds_conventional"))]
    LengthExceedsConventional {
        name: &'static str,
        actual: usize,
        conventional: u8,
    },

    #[error("Requested length {requested} is larger than actual digest length {actual}")]
    #[diagnostic(
        code("multihash::requested_length"),
        help("Digests can be truncated but never padded")
    )]
    RequestedLengthTooLarge { requested: usize, actual: usize },

    #[error("Illegal digest length {len}, allowed range is 1 <= length <= 127")]
    #[diagnostic(code("multihash::digest_length"))]
    IllegalDigestLength { len: usize },

    #[error("Supplied hash function name '{name}' doesn't match the code {code:#04x} ({expected})")]
    #[diagnostic(code("multihash::name_code_mismatch"))]
    NameCodeMismatch {
        name: String,
        code: u8,
        expected: &'static str,
    },

    #[error("Unknown hash function name '{0}'")]
    #[diagnostic(code("multihash::unknown_name"))]
    UnknownFunctionName(String),

    #[error("Invalid hex encoded multihash: {reason}")]
    #[diagnostic(code("multihash::invalid_hex"))]
    InvalidHex { reason: String, given: String },

    #[error("Hash provider does not support code {code:#04x}")]
    #[diagnostic(code("multihash::unsupported_function"))]
    UnsupportedFunction { code: u8 },
}
