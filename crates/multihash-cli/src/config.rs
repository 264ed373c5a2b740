// Copyright (c) Contributors to the multihash project.
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::Result;

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

static CONFIG: OnceCell<RwLock<Arc<Config>>> = OnceCell::new();

/// The environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "MULTIHASH_";

/// How command results are written to stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Output {
    /// The format used to print command results
    pub format: OutputFormat,

    /// Print hex values with uppercase letters
    pub uppercase: bool,
}

/// Configuration values for the multihash command line.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    // These sub-types should only have one level of values
    // within them so they can be addressed with environment variables.
    pub output: Output,
}

impl Config {
    /// Encode bytes as hex, in the configured letter case
    pub fn hex(&self, bytes: &[u8]) -> String {
        if self.output.uppercase {
            data_encoding::HEXUPPER.encode(bytes)
        } else {
            data_encoding::HEXLOWER.encode(bytes)
        }
    }
}

/// Get the current config, loading it from disk if needed.
pub fn get_config() -> Result<Arc<Config>> {
    let config = CONFIG.get_or_try_init(|| -> Result<RwLock<Arc<Config>>> {
        Ok(RwLock::new(Arc::new(load_config()?)))
    })?;
    let lock = config
        .read()
        .map_err(|err| crate::Error::LockPoisonedRead(err.to_string()))?;
    Ok(Arc::clone(&*lock))
}

/// Load the configuration from disk, even if it has already been loaded.
///
/// This includes the system and user configurations (if they exist)
/// followed by any `MULTIHASH_<SECTION>_<NAME>` environment variables.
pub fn load_config() -> Result<Config> {
    load_config_from(config_files(), std::env::vars())
}

/// The config file locations, lowest priority first.
///
/// Each entry has no extension, any format supported by the
/// config crate can be used: toml, yaml, json, ini, etc.
fn config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from("/etc/multihash")];
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join("multihash").join("multihash"));
    }
    files
}

fn load_config_from(
    files: impl IntoIterator<Item = PathBuf>,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<Config> {
    use config::{Config as RawConfig, File};

    let mut config_builder = RawConfig::builder();
    for file in files {
        config_builder =
            config_builder.add_source(File::with_name(&format!("{}", file.display())).required(false));
    }

    for (var, value) in vars {
        let Some(tail) = var.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let Some((section, name)) = tail.split_once('_') else {
            // a value with no section is not a configuration
            // value, and can be skipped (eg: MULTIHASH_LOG)
            continue;
        };

        let key = format!("{}.{}", section.to_lowercase(), name.to_lowercase());
        config_builder = config_builder.set_override(key, value)?;
    }

    let config = config_builder.build()?;
    Ok(Config::deserialize(config)?)
}
