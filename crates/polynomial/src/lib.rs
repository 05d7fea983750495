// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Exact Interpolation Library
//!
//! Exact arithmetic over big integers for reconstructing the constant term of a
//! polynomial from a set of sample points.
//!
//! ## Features
//!
//! - Uses `num-bigint` for integer representation, so no value ever overflows.
//! - Radix decoding: numeral strings in any base from 2 to 36.
//! - Exact rationals: fractions kept in lowest terms with a positive denominator.
//! - Lagrange interpolation at `x = 0` with no intermediate rounding.
//!
//! ## Mathematical Background
//!
//! Any `k` points with distinct x-coordinates determine a unique polynomial of
//! degree at most `k - 1`. Evaluating the Lagrange form of that polynomial at
//! zero yields its constant term, which is the secret in a threshold
//! secret sharing scheme:
//!
//! ```text
//! P(0) = Σ_i y_i · Π_{j≠i} (0 − x_j) / (x_i − x_j)
//! ```

pub mod errors;
pub mod interpolation;
pub mod polynomial;
pub mod radix;
pub mod rational;
pub mod utils;

pub use errors::PolynomialError;
pub use interpolation::{interpolate_at_zero, Point};
pub use polynomial::Polynomial;
pub use radix::{decode, render};
pub use rational::Rational;
pub use utils::*;
