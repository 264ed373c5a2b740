// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use multihash_cli::{Opt, configure_logging, get_config};

fn main() {
    // because this function exits right away it does not
    // properly handle destruction of data, so we put the actual
    // logic into a separate function/scope
    std::process::exit(main2())
}

fn main2() -> i32 {
    let mut opt = Opt::parse();
    configure_logging(opt.verbose);

    let config = match get_config() {
        Err(err) => {
            tracing::error!(err = ?err, "failed to load config");
            return 1;
        }
        Ok(config) => config,
    };

    match opt.run(&config) {
        Err(err) => {
            eprintln!("{err:?}");
            1
        }
        Ok(code) => code,
    }
}
