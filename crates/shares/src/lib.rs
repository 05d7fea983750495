// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Share record loading and secret reconstruction.
//!
//! Decodes every share of a [`ShareRecord`], orders the resulting points by
//! x-coordinate, takes the first `k` and interpolates them at zero.

mod errors;
mod points;
mod record;

pub use errors::ShareError;
pub use points::{parse_x_coordinate, PointSet};
pub use record::{EncodedShare, Scalar, ShareRecord, KEYS_FIELD};

use num_bigint::BigInt;
use recon_polynomial::{all_distinct, interpolate_at_zero, Rational};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reconstructs the secret held by a share record.
///
/// # Errors
///
/// Returns `ShareError::InsufficientPoints` if the record holds fewer shares than
/// its threshold, and propagates decoding and interpolation errors.
pub fn reconstruct(record: &ShareRecord) -> Result<Rational, ShareError> {
    let points = record.decode_points()?;
    info!(
        "Decoded {} shares, threshold is {}",
        points.len(),
        record.threshold()
    );

    let chosen = points.select(record.threshold())?;
    for point in chosen {
        debug!("Using share {}", point);
    }

    let xs: Vec<BigInt> = chosen.iter().map(|p| p.x.clone()).collect();
    if !all_distinct(&xs) {
        warn!("Selected shares repeat an x-coordinate, interpolation will fail");
    }

    Ok(interpolate_at_zero(chosen)?)
}

/// Loads the record at `path` and reconstructs its secret.
pub fn reconstruct_file(path: impl AsRef<Path>) -> Result<Rational, ShareError> {
    let record = ShareRecord::load(path)?;
    reconstruct(&record)
}
