// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use clap::Args;

use crate::{Config, OutputFormat, Result};

/// List the registered hash functions
#[derive(Debug, Args)]
pub struct CmdList {}

impl CmdList {
    pub fn run(&mut self, config: &Config) -> miette::Result<i32> {
        println!("{}", self.output(config)?);
        Ok(0)
    }

    pub(crate) fn output(&self, config: &Config) -> Result<String> {
        let functions: Vec<_> = multihash::registry::functions().collect();
        match config.output.format {
            OutputFormat::Text => Ok(functions
                .iter()
                .map(|f| format!("{:#04x}  {:<10}{}", f.code, f.name, f.size))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string(&functions)?),
        }
    }
}
