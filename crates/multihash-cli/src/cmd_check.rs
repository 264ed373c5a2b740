// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use clap::Args;
use serde_json::json;

use crate::{Config, OutputFormat, Result};

/// Report whether a hash function code is valid
#[derive(Debug, Args)]
pub struct CmdCheck {
    /// The code to check, in decimal or with a 0x prefix
    #[clap(value_name = "CODE", value_parser = crate::parse_code)]
    code: u8,
}

impl CmdCheck {
    pub fn run(&mut self, config: &Config) -> miette::Result<i32> {
        let (out, valid) = self.output(config)?;
        println!("{out}");
        if !valid {
            tracing::error!("{:#04x} is not a valid multihash code", self.code);
            return Ok(1);
        }
        Ok(0)
    }

    pub(crate) fn output(&self, config: &Config) -> Result<(String, bool)> {
        let code = self.code;
        let function = multihash::registry::lookup(code);
        let kind = if multihash::is_app_code(code) {
            "app-specific"
        } else if function.is_some() {
            "registered"
        } else {
            "invalid"
        };
        let valid = multihash::is_valid_code(code);
        let out = match config.output.format {
            OutputFormat::Text => match function {
                Some(f) => format!("{code:#04x}: {kind} ({}, {} bytes)", f.name, f.size),
                None => format!("{code:#04x}: {kind}"),
            },
            OutputFormat::Json => serde_json::to_string(&json!({
                "code": code,
                "kind": kind,
                "valid": valid,
                "function": function,
            }))?,
        };
        Ok((out, valid))
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::CmdCheck;
    use crate::Config;

    #[rstest]
    #[case(0x05, "0x05: app-specific", true)]
    #[case(0x10, "0x10: invalid", false)]
    #[case(0x12, "0x12: registered (sha2-256, 32 bytes)", true)]
    fn test_check(#[case] code: u8, #[case] expected: &str, #[case] valid: bool) {
        let (out, is_valid) = CmdCheck { code }.output(&Config::default()).unwrap();
        assert_eq!(out, expected);
        assert_eq!(is_valid, valid);
    }
}
