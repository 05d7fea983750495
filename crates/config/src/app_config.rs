// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use crate::yaml::load_yaml_with_env;
use anyhow::{anyhow, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::{env, path::PathBuf};
use tracing::Level;

/// The file looked up when no `--config` is given.
pub const DEFAULT_CONFIG_NAME: &str = "recon.config.yaml";

/// The share record read when no input path is configured.
pub const DEFAULT_INPUT: &str = "input.json";

/// Prefix for environment overrides, eg. `RECON_INPUT=shares.json`.
pub const ENV_PREFIX: &str = "RECON_";

/// Resolved application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Path to the JSON share record
    input: PathBuf,
    /// Log level name, eg. "warn" or "debug"
    log_level: String,
    /// The configuration file that was resolved, if it exists
    config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            log_level: Level::WARN.to_string(),
            config_file: None,
        }
    }
}

impl AppConfig {
    pub fn input(&self) -> &PathBuf {
        &self.input
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| anyhow!("Invalid log level '{}'", self.log_level))
    }
}

/// Values passed from the cli that take precedence over every other layer.
///
/// Only values the user actually supplied are set.
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Builds the configuration from defaults, the YAML file, `RECON_*`
/// environment variables and cli overrides, later layers winning.
pub fn load_config(config_file: Option<PathBuf>, overrides: CliOverrides) -> Result<AppConfig> {
    let cwd = env::current_dir()?;
    let default_config_dir = dirs::config_dir()
        .map(|dir| dir.join("recon"))
        .unwrap_or_else(|| cwd.clone());

    let resolved_config_path = resolve_config_path(
        find_in_parent,
        cwd,
        default_config_dir,
        DEFAULT_CONFIG_NAME,
        config_file,
    );

    let loaded_yaml = load_yaml_with_env(&resolved_config_path)?;

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    if !loaded_yaml.trim().is_empty() {
        figment = figment.merge(Yaml::string(&loaded_yaml));
    }

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(&["input", "log_level"]))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    config.config_file = resolved_config_path
        .exists()
        .then_some(resolved_config_path);

    Ok(config)
}
