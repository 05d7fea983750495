// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact rational numbers over big integers.

use crate::errors::PolynomialError;
use crate::utils::gcd;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A fraction of two `BigInt`s kept in canonical form.
///
/// Every constructor and every arithmetic operation leaves the value with a
/// strictly positive denominator that is coprime to the numerator. Zero is
/// always stored as `0/1`. Because the form is canonical, structural equality
/// is numeric equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates a rational from a numerator and a denominator.
    ///
    /// The sign is moved onto the numerator and both parts are divided by their
    /// greatest common divisor.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, PolynomialError> {
        if denom.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        Ok(Self::reduced(numer, denom))
    }

    /// Creates the rational `n/1`.
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numer: n,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    // Caller guarantees `denom != 0`.
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let divisor = gcd(&numer, &denom);
        Self {
            numer: numer / &divisor,
            denom: denom / divisor,
        }
    }

    /// Returns the numerator. Carries the sign of the value.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Returns the denominator. Always strictly positive.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Checks whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns the value as an integer if the denominator is one.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numer.clone())
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational, PolynomialError> {
        if other.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        Rational::new(&self.numer * &other.denom, &self.denom * &other.numer)
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if `self` is zero.
    pub fn recip(&self) -> Result<Rational, PolynomialError> {
        Rational::one().checked_div(self)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, other: &Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, other: &Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, other: &Rational) -> Rational {
        Rational::reduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                (&self).$method(&other)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, other: &Rational) -> Rational {
                (&self).$method(other)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, other: Rational) -> Rational {
                self.$method(&other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
