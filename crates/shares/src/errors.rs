// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for loading shares and reconstructing secrets.

use recon_polynomial::PolynomialError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a share record into a secret.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The share file could not be read
    #[error("Failed to open file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing required fields or unparsable record data
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// Fewer decoded shares than the threshold requires
    #[error("Not enough points provided. Have {have} need {need}")]
    InsufficientPoints { have: usize, need: usize },

    /// Radix decoding or exact arithmetic failure
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
}

impl ShareError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ShareError::MalformedInput {
            message: message.into(),
        }
    }
}
