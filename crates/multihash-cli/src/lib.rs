// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0
//! Main entry points and utilities for the command line interface.

mod args;
pub mod cmd_check;
pub mod cmd_decode;
pub mod cmd_encode;
pub mod cmd_list;
mod config;
mod error;

use clap::{Parser, Subcommand};

pub use args::{configure_logging, parse_code};
pub use self::config::{Config, Output, OutputFormat, get_config, load_config};
pub use error::{Error, Result};

/// Pack and unpack self-describing hash digests
#[derive(Debug, Parser)]
#[clap(name = "mh", about, version)]
pub struct Opt {
    /// Make output more verbose, can be specified more than once
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Override the configured output format
    #[clap(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[clap(subcommand)]
    pub cmd: Command,
}

impl Opt {
    pub fn run(&mut self, config: &Config) -> miette::Result<i32> {
        let mut config = config.clone();
        if let Some(format) = self.format {
            config.output.format = format;
        }
        self.cmd.run(&config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Check(cmd_check::CmdCheck),
    Decode(cmd_decode::CmdDecode),
    Encode(cmd_encode::CmdEncode),
    #[clap(visible_alias = "ls")]
    List(cmd_list::CmdList),
}

impl Command {
    pub fn run(&mut self, config: &Config) -> miette::Result<i32> {
        match self {
            Command::Check(cmd) => cmd.run(config),
            Command::Decode(cmd) => cmd.run(config),
            Command::Encode(cmd) => cmd.run(config),
            Command::List(cmd) => cmd.run(config),
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use rstest::rstest;

    use super::{Command, Opt, OutputFormat};

    #[rstest]
    fn test_global_flags() {
        let opt = Opt::try_parse_from(["mh", "ls", "-vv", "--format", "json"]).unwrap();
        assert_eq!(opt.verbose, 2);
        assert_eq!(opt.format, Some(OutputFormat::Json));
        assert!(matches!(opt.cmd, Command::List(_)));
    }

    #[rstest]
    fn test_check_exit_code() {
        let config = super::Config::default();
        let mut opt = Opt::try_parse_from(["mh", "check", "0x10"]).unwrap();
        assert_eq!(opt.run(&config).unwrap(), 1, "0x10 is not a valid code");
        let mut opt = Opt::try_parse_from(["mh", "check", "15"]).unwrap();
        assert_eq!(opt.run(&config).unwrap(), 0, "15 is app specific");
    }
}
