// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::ShareError;
use num_bigint::BigInt;
use num_traits::Zero;
use recon_polynomial::Point;

/// Parses a record key into an x-coordinate.
///
/// The trimmed key is read as a signed decimal integer. Keys that are not
/// plain integers fall back to the value of their digit characters alone, so
/// `"x-12"` becomes 12 and a key without digits becomes 0.
pub fn parse_x_coordinate(key: &str) -> BigInt {
    key.trim().parse::<BigInt>().unwrap_or_else(|_| {
        key.chars()
            .filter_map(|c| c.to_digit(10))
            .fold(BigInt::zero(), |acc, d| acc * 10u32 + d)
    })
}

/// Decoded points ordered by ascending x-coordinate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a set from points in any order. The sort is stable, so points
    /// with equal x keep their input order.
    pub fn new(mut points: Vec<Point>) -> Self {
        points.sort_by(|a, b| a.x.cmp(&b.x));
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Returns the `k` points with the smallest x-coordinates.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::InsufficientPoints` if the set holds fewer than `k` points.
    pub fn select(&self, k: usize) -> Result<&[Point], ShareError> {
        self.points
            .get(..k)
            .ok_or(ShareError::InsufficientPoints {
                have: self.points.len(),
                need: k,
            })
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_x_coordinate() {
        assert_eq!(parse_x_coordinate("7"), BigInt::from(7));
        assert_eq!(parse_x_coordinate(" 42 "), BigInt::from(42));
        assert_eq!(parse_x_coordinate("-3"), BigInt::from(-3));
        assert_eq!(parse_x_coordinate("+3"), BigInt::from(3));
        assert_eq!(
            parse_x_coordinate("123456789012345678901234567890"),
            "123456789012345678901234567890".parse::<BigInt>().unwrap()
        );
    }

    #[test]
    fn test_parse_x_coordinate_fallback() {
        assert_eq!(parse_x_coordinate("x12"), BigInt::from(12));
        assert_eq!(parse_x_coordinate("1a2"), BigInt::from(12));
        assert_eq!(parse_x_coordinate("share"), BigInt::from(0));
        assert_eq!(parse_x_coordinate(""), BigInt::from(0));
    }

    #[test]
    fn test_points_are_sorted() {
        let set = PointSet::new(vec![
            Point::new(3, 38),
            Point::new(-1, 4),
            Point::new(2, 21),
        ]);
        let xs: Vec<BigInt> = set.iter().map(|p| p.x.clone()).collect();
        assert_eq!(xs, vec![BigInt::from(-1), BigInt::from(2), BigInt::from(3)]);
    }

    #[test]
    fn test_select() {
        let set = PointSet::from(vec![
            Point::new(4, 61),
            Point::new(1, 10),
            Point::new(3, 38),
            Point::new(2, 21),
        ]);
        assert_eq!(
            set.select(3).unwrap(),
            &[Point::new(1, 10), Point::new(2, 21), Point::new(3, 38)]
        );
        assert_eq!(set.select(4).unwrap().len(), 4);
        assert!(set.select(0).unwrap().is_empty());
    }

    #[test]
    fn test_select_insufficient() {
        let set = PointSet::new(vec![Point::new(1, 10), Point::new(2, 21)]);
        assert!(matches!(
            set.select(3),
            Err(ShareError::InsufficientPoints { have: 2, need: 3 })
        ));
    }
}
