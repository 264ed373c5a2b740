// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use clap::Args;
use multihash::DecodedMultihash;
use serde_json::json;

use crate::{Config, OutputFormat, Result};

#[cfg(test)]
#[path = "./cmd_decode_test.rs"]
mod cmd_decode_test;

/// Show the fields of a hex encoded multihash
#[derive(Debug, Args)]
pub struct CmdDecode {
    /// The hex encoded multihash to decode
    #[clap(value_name = "MULTIHASH")]
    multihash: String,
}

impl CmdDecode {
    pub fn run(&mut self, config: &Config) -> miette::Result<i32> {
        println!("{}", self.output(config)?);
        Ok(0)
    }

    pub(crate) fn output(&self, config: &Config) -> Result<String> {
        let decoded = DecodedMultihash::parse(&self.multihash)?;
        tracing::debug!(code = decoded.code(), length = decoded.length(), "decoded");
        let digest = config.hex(decoded.digest());
        match config.output.format {
            OutputFormat::Text => {
                let mut lines = vec![
                    format!("code:   {:#04x}", decoded.code()),
                    format!("length: {}", decoded.length()),
                    format!("name:   {}", decoded.name().unwrap_or("<app-specific>")),
                    format!("digest: {digest}"),
                ];
                if decoded.is_truncated() {
                    lines.push("(truncated)".to_string());
                }
                Ok(lines.join("\n"))
            }
            OutputFormat::Json => Ok(serde_json::to_string(&json!({
                "code": decoded.code(),
                "length": decoded.length(),
                "name": decoded.name(),
                "digest": digest,
                "truncated": decoded.is_truncated(),
            }))?),
        }
    }
}
