// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use anyhow::Result;
use clap::{ArgAction, Parser};
use recon_config::{load_config, CliOverrides};
use recon_shares::reconstruct_file;
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "recon")]
#[command(about = "Reconstruct a threshold secret from a JSON record of encoded shares", long_about = None)]
pub struct Cli {
    /// Path to the share record. Falls back to the configured input, `input.json` by default
    pub input: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `recon -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count
    )]
    pub verbose: u8,

    /// Silence all output except errors. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose"
    )]
    quiet: bool,
}

impl Cli {
    /// The log level requested by flags, if any flag was given.
    pub fn log_level(&self) -> Option<Level> {
        if self.quiet {
            return Some(Level::ERROR);
        }
        match self.verbose {
            0 => None,
            1 => Some(Level::INFO),  // -v
            2 => Some(Level::DEBUG), // -vv
            _ => Some(Level::TRACE), // -vvv
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let overrides = CliOverrides {
            input: self.input.clone(),
            log_level: self.log_level().map(|level| level.to_string()),
        };
        let config = load_config(self.config.clone(), overrides)?;

        setup_simple_tracing(config.log_level()?);
        info!("Config loaded from: {:?}", config.config_file());
        info!("Reading shares from {}", config.input().display());

        let secret = reconstruct_file(config.input())?;
        info!(secret = %secret, integer = secret.is_integer(), "Reconstructed secret");

        println!("{secret}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_input() {
        let cli = Cli::try_parse_from(["recon", "shares.json"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("shares.json")));
        assert_eq!(cli.log_level(), None);
    }

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::try_parse_from(["recon"]).unwrap();
        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["recon", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), Some(Level::DEBUG));

        let cli = Cli::try_parse_from(["recon", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), Some(Level::TRACE));

        let cli = Cli::try_parse_from(["recon", "--quiet"]).unwrap();
        assert_eq!(cli.log_level(), Some(Level::ERROR));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["recon", "-q", "-v"]).is_err());
    }
}
