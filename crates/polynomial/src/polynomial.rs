// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomials used to produce shares with a known secret.

use crate::interpolation::Point;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::fmt;
use tracing::debug;

/// A polynomial represented by its coefficients in descending order of degree.
///
/// The polynomial is represented as:
/// `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0`
///
/// The constant term `a_0` is the secret that interpolation at zero recovers.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    /// Coefficients in descending order (highest degree first).
    pub(crate) coefficients: Vec<BigInt>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            let degree = self.coefficients.len() - 1 - i;

            if coeff.is_zero() {
                continue;
            }

            if !first {
                if coeff.is_positive() {
                    write!(f, " + ")?;
                } else {
                    write!(f, " - ")?;
                }
            } else if coeff.is_negative() {
                write!(f, "-")?;
            }
            first = false;

            let abs_coeff = coeff.abs();
            if degree == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in descending order of degree.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// Creates a polynomial from coefficients in ascending order format.
    ///
    /// The first entry is the constant term, which is the usual way to write
    /// down a sharing polynomial: `[secret, a_1, a_2, ...]`.
    ///
    /// # Arguments
    ///
    /// * `ascending_coefficients` - Vector of coefficients in ascending order.
    pub fn from_ascending_coefficients(ascending_coefficients: Vec<BigInt>) -> Self {
        let mut coefficients = ascending_coefficients;
        coefficients.reverse();
        Self { coefficients }
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of a zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Returns the constant term, i.e. the value at zero.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.last().cloned().unwrap_or_default()
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }

    /// Evaluates the polynomial at each x-coordinate, producing one point per input.
    ///
    /// # Arguments
    ///
    /// * `xs` - The x-coordinates to sample at.
    pub fn sample(&self, xs: &[BigInt]) -> Vec<Point> {
        debug!("Sampling {} at {} points", self, xs.len());
        xs.iter()
            .map(|x| Point {
                x: x.clone(),
                y: self.evaluate(x),
            })
            .collect()
    }
}
