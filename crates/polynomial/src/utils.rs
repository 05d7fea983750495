// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for big integer arithmetic.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Computes the greatest common divisor of two integers.
///
/// Uses the Euclidean algorithm on the absolute values of both inputs, so the
/// result is never negative. By convention `gcd(0, d) = |d|` and `gcd(0, 0) = 0`.
///
/// # Arguments
///
/// * `a` - The first integer.
/// * `b` - The second integer.
///
/// # Returns
///
/// A non-negative `BigInt` dividing both `a` and `b`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }

    a
}

/// Checks whether all x-coordinates in a slice are pairwise distinct.
///
/// Interpolation requires distinct x-coordinates. Callers that control how
/// points are chosen can use this to reject a set before interpolating it.
///
/// # Arguments
///
/// * `xs` - The x-coordinates to check.
///
/// # Returns
///
/// `true` if no two entries are equal, `false` otherwise.
pub fn all_distinct(xs: &[BigInt]) -> bool {
    let mut sorted: Vec<&BigInt> = xs.iter().collect();
    sorted.sort();
    sorted.windows(2).all(|pair| pair[0] != pair[1])
}
