// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for exact arithmetic and interpolation.

use thiserror::Error;

/// Errors that can occur while decoding numerals or doing exact arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Radix outside the supported `2..=36` range
    #[error("Unsupported radix {radix}: must be between 2 and 36")]
    UnsupportedRadix { radix: u32 },

    /// Numeral character that is not a digit in the given radix
    #[error("Invalid digit '{digit}' for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Zero denominator, zero divisor, or two points sharing an x-coordinate
    #[error("Division by zero")]
    DivisionByZero,
}
