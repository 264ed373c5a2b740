// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use tracing_subscriber::prelude::*;

const MULTIHASH_LOG: &str = "MULTIHASH_LOG";

/// Parse a hash function code from the command line.
///
/// Accepts a registered function name, a hex value with
/// a `0x` prefix, or a plain decimal value.
pub fn parse_code(value: &str) -> std::result::Result<u8, String> {
    if let Some(code) = multihash::registry::code_of(value) {
        return Ok(code);
    }
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|_| {
        format!("'{value}' is not a function name or a code between 0 and 255")
    })
}

/// Setup the global tracing subscriber for the given verbosity.
///
/// The `MULTIHASH_LOG` variable is used when no verbosity
/// is requested, and `RUST_LOG` is always appended as an override.
pub fn configure_logging(verbosity: u8) {
    let mut config = match verbosity {
        0 => {
            if let Ok(existing) = std::env::var(MULTIHASH_LOG) {
                existing
            } else {
                "multihash=info,warn".to_string()
            }
        }
        1 => "multihash=debug,multihash_cli=debug,info".to_string(),
        2 => "multihash=trace,multihash_cli=trace,info".to_string(),
        _ => "trace".to_string(),
    };
    if let Ok(overrides) = std::env::var("RUST_LOG") {
        config.push(',');
        config.push_str(&overrides);
    }
    let env_filter = tracing_subscriber::filter::EnvFilter::new(config);
    let stderr_log = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(verbosity > 1)
        .with_writer(std::io::stderr);

    let sub = tracing_subscriber::registry().with(stderr_log.with_filter(env_filter));
    if let Err(err) = tracing::subscriber::set_global_default(sub) {
        eprintln!("failed to initialize output log: {err}");
    }
}
