// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation evaluated at zero.

use crate::errors::PolynomialError;
use crate::rational::Rational;
use num_bigint::BigInt;
use std::fmt;
use tracing::{debug, trace};

/// A sample point `(x, y)` of a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl From<(BigInt, BigInt)> for Point {
    fn from((x, y): (BigInt, BigInt)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Computes the value at `x = 0` of the unique polynomial through `points`.
///
/// For each point `i` the Lagrange basis value at zero
/// `Π_{j≠i} (0 − x_j) / (x_i − x_j)` is built as an exact rational, scaled by
/// `y_i` and added to the running sum. No intermediate value is ever rounded,
/// so the result is exact for coordinates of any magnitude. For points sampled
/// from an integer polynomial the result is an integer.
///
/// An empty slice interpolates to zero.
///
/// # Arguments
///
/// * `points` - The sample points. Their x-coordinates must be pairwise distinct.
///
/// # Errors
///
/// Returns `PolynomialError::DivisionByZero` if two points share an x-coordinate.
pub fn interpolate_at_zero(points: &[Point]) -> Result<Rational, PolynomialError> {
    debug!(points = points.len(), "Interpolating at x = 0");

    let mut secret = Rational::zero();
    for (i, point) in points.iter().enumerate() {
        let basis = lagrange_basis_at_zero(points, i)?;
        trace!(x = %point.x, basis = %basis, "Lagrange basis value");
        secret = secret + basis * Rational::from_integer(point.y.clone());
    }

    Ok(secret)
}

/// Returns `Π_{j≠i} (0 − x_j) / (x_i − x_j)`, the `i`-th Lagrange basis
/// polynomial evaluated at zero.
fn lagrange_basis_at_zero(points: &[Point], i: usize) -> Result<Rational, PolynomialError> {
    let xi = &points[i].x;
    let mut product = Rational::one();

    for (j, other) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        // A repeated x-coordinate makes this denominator zero.
        product = product * Rational::new(-&other.x, xi - &other.x)?;
    }

    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::Polynomial;
    use num_traits::One;
    use proptest::prelude::*;

    fn points(pairs: &[(i64, i64)]) -> Vec<Point> {
        pairs.iter().map(|(x, y)| Point::new(*x, *y)).collect()
    }

    #[test]
    fn test_quadratic_secret() {
        // P(x) = 5 + 2x + 3x^2
        let pts = points(&[(1, 10), (2, 21), (3, 38)]);
        let secret = interpolate_at_zero(&pts).unwrap();
        assert_eq!(secret, Rational::from(5));
        assert_eq!(secret.to_string(), "5");
    }

    #[test]
    fn test_point_order_does_not_matter() {
        let pts = points(&[(3, 38), (1, 10), (2, 21)]);
        assert_eq!(interpolate_at_zero(&pts).unwrap(), Rational::from(5));
    }

    #[test]
    fn test_single_point_is_constant() {
        let pts = points(&[(7, 42)]);
        assert_eq!(interpolate_at_zero(&pts).unwrap(), Rational::from(42));
    }

    #[test]
    fn test_empty_point_set() {
        assert_eq!(interpolate_at_zero(&[]).unwrap(), Rational::zero());
    }

    #[test]
    fn test_negative_coordinates() {
        // P(x) = -4 + x
        let pts = points(&[(-2, -6), (3, -1)]);
        assert_eq!(interpolate_at_zero(&pts).unwrap(), Rational::from(-4));
    }

    #[test]
    fn test_non_integer_result() {
        // The line through (1, 1) and (3, 2) crosses x = 0 at 1/2
        let pts = points(&[(1, 1), (3, 2)]);
        let secret = interpolate_at_zero(&pts).unwrap();
        assert!(!secret.is_integer());
        assert_eq!(secret.to_string(), "1/2");
    }

    #[test]
    fn test_duplicate_x_fails() {
        let pts = points(&[(1, 10), (2, 21), (1, 10)]);
        assert_eq!(
            interpolate_at_zero(&pts),
            Err(PolynomialError::DivisionByZero)
        );
    }

    #[test]
    fn test_large_secret() {
        // Secret and coefficients far wider than any machine word
        let secret: BigInt = BigInt::one() << 300;
        let poly = Polynomial::from_ascending_coefficients(vec![
            secret.clone(),
            (BigInt::one() << 200) + 17,
            BigInt::from(-99),
        ]);
        let pts = poly.sample(&[BigInt::from(10), BigInt::from(20), BigInt::from(30)]);
        let result = interpolate_at_zero(&pts).unwrap();
        assert_eq!(result.to_integer(), Some(secret));
    }

    fn arb_polynomial_and_xs() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
        (1usize..8).prop_flat_map(|k| {
            (
                prop::collection::vec(-1_000_000i64..1_000_000, k),
                prop::collection::hash_set(-500i64..500, k)
                    .prop_map(|xs| xs.into_iter().collect::<Vec<_>>()),
            )
        })
    }

    proptest! {
        #[test]
        fn recovers_constant_term((coeffs, xs) in arb_polynomial_and_xs()) {
            let poly = Polynomial::from_ascending_coefficients(
                coeffs.iter().map(|c| BigInt::from(*c)).collect(),
            );
            let xs: Vec<BigInt> = xs.into_iter().map(BigInt::from).collect();
            let pts = poly.sample(&xs);

            let secret = interpolate_at_zero(&pts).unwrap();
            prop_assert_eq!(secret.to_integer(), Some(BigInt::from(coeffs[0])));
        }

        #[test]
        fn repeated_x_always_fails(
            (coeffs, xs) in arb_polynomial_and_xs(),
            dup in any::<prop::sample::Index>(),
        ) {
            let poly = Polynomial::from_ascending_coefficients(
                coeffs.iter().map(|c| BigInt::from(*c)).collect(),
            );
            let mut xs: Vec<BigInt> = xs.into_iter().map(BigInt::from).collect();
            xs.push(xs[dup.index(xs.len())].clone());
            let pts = poly.sample(&xs);

            prop_assert_eq!(interpolate_at_zero(&pts), Err(PolynomialError::DivisionByZero));
        }
    }
}
