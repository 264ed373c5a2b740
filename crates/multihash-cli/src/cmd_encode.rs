// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use clap::Args;
use data_encoding::HEXLOWER_PERMISSIVE;
use serde_json::json;

use crate::{Config, Error, OutputFormat, Result};

#[cfg(test)]
#[path = "./cmd_encode_test.rs"]
mod cmd_encode_test;

/// Wrap a hex digest in a multihash
#[derive(Debug, Args)]
pub struct CmdEncode {
    /// The hex encoded digest to wrap
    #[clap(value_name = "DIGEST")]
    digest: String,

    /// The hash function, as a registered name or a code
    #[clap(long, short, value_parser = crate::parse_code)]
    code: u8,

    /// Truncate the encoded digest to this many bytes
    #[clap(long, short)]
    length: Option<usize>,

    /// Also check that the code belongs to this function name
    #[clap(long)]
    name: Option<String>,
}

impl CmdEncode {
    pub fn run(&mut self, config: &Config) -> miette::Result<i32> {
        println!("{}", self.output(config)?);
        Ok(0)
    }

    pub(crate) fn output(&self, config: &Config) -> Result<String> {
        let digest = HEXLOWER_PERMISSIVE
            .decode(self.digest.as_bytes())
            .map_err(|source| Error::InvalidDigestHex {
                given: self.digest.clone(),
                source,
            })?;
        tracing::debug!(
            code = self.code,
            digest_len = digest.len(),
            length = ?self.length,
            "encoding digest"
        );
        let encoded = multihash::encode(&digest, self.code, self.length, self.name.as_deref())?;
        let hex = config.hex(&encoded);
        match config.output.format {
            OutputFormat::Text => Ok(hex),
            OutputFormat::Json => Ok(serde_json::to_string(&json!({ "multihash": hex }))?),
        }
    }
}
