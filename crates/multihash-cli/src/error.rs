// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    #[error("Cannot load config, lock has been poisoned: {0}")]
    LockPoisonedRead(String),

    #[error("Invalid hex digest '{given}'")]
    #[diagnostic(
        code("multihash::cli::invalid_digest"),
        help("Digests are given as hex strings, eg: 'f7ff9e8b'")
    )]
    InvalidDigestHex {
        given: String,
        #[source]
        source: data_encoding::DecodeError,
    },

    #[error(transparent)]
    #[diagnostic(forward(0))]
    Multihash(#[from] multihash::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
