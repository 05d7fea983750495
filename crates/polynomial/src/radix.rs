// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Conversion between numeral strings in an arbitrary radix and big integers.

use crate::errors::PolynomialError;
use num_bigint::BigInt;
use num_traits::Zero;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (`0-9` followed by `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Returns an error unless `radix` lies in `MIN_RADIX..=MAX_RADIX`.
pub fn check_radix(radix: u32) -> Result<(), PolynomialError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(PolynomialError::UnsupportedRadix { radix })
    }
}

/// Maps a numeral character to its digit value.
///
/// `0-9` map to 0..9 and letters map to 10..35 regardless of case. Any other
/// character has no digit value.
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(MAX_RADIX)
}

/// Decodes a numeral string in the given radix into a `BigInt`.
///
/// Digits are accumulated left to right as `result * radix + digit`. The
/// characters `+` and `-` are skipped wherever they appear and never change the
/// sign, so the result is always non-negative. An empty numeral decodes to zero.
///
/// # Arguments
///
/// * `numeral` - The numeral string to decode.
/// * `radix` - The radix the numeral is written in.
///
/// # Errors
///
/// Returns `PolynomialError::UnsupportedRadix` if `radix` is outside `2..=36`.
/// Returns `PolynomialError::InvalidDigit` if a character is not a digit or its
/// value is not below `radix`.
pub fn decode(numeral: &str, radix: u32) -> Result<BigInt, PolynomialError> {
    check_radix(radix)?;
    let base = BigInt::from(radix);

    numeral
        .chars()
        .filter(|c| !matches!(c, '+' | '-'))
        .try_fold(BigInt::zero(), |acc, c| {
            digit_value(c)
                .filter(|d| *d < radix)
                .map(|d| acc * &base + d)
                .ok_or(PolynomialError::InvalidDigit { digit: c, radix })
        })
}

/// Renders a `BigInt` as a numeral string in the given radix.
///
/// Digits above nine are written as lowercase letters. Negative values carry a
/// leading `-`.
///
/// # Errors
///
/// Returns `PolynomialError::UnsupportedRadix` if `radix` is outside `2..=36`.
pub fn render(value: &BigInt, radix: u32) -> Result<String, PolynomialError> {
    check_radix(radix)?;
    Ok(value.to_str_radix(radix))
}
