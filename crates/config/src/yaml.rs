// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Reads a YAML file and substitutes `$VAR` and `${VAR}` from the environment.
///
/// A file that cannot be read yields an empty string.
pub fn load_yaml_with_env(file_path: &Path) -> Result<String> {
    let content = fs::read_to_string(file_path).unwrap_or_default();

    let expanded = shellexpand::env(&content).with_context(|| {
        format!(
            "Could not substitute environment variables in {}",
            file_path.display()
        )
    })?;

    Ok(expanded.to_string())
}
