// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The JSON share record.
//!
//! A record looks like this:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "10" },
//!     "2": { "base": "2", "value": "10101" },
//!     "3": { "base": "16", "value": "26" }
//! }
//! ```
//!
//! `keys.k` is the threshold. Every other field is a share keyed by its
//! x-coordinate, holding the radix and the encoded y-value.

use crate::errors::ShareError;
use crate::points::{parse_x_coordinate, PointSet};
use num_bigint::BigInt;
use recon_polynomial::{decode, Point};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// The reserved field holding the record parameters.
pub const KEYS_FIELD: &str = "keys";

/// A share field that may be written either as a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{text}"),
            Scalar::Number(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: Option<Scalar>,
    value: Option<Scalar>,
}

/// One share as written in the record, before decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedShare {
    /// The record key the share was stored under.
    pub key: String,
    pub base: Scalar,
    pub value: Scalar,
}

impl EncodedShare {
    /// The x-coordinate encoded in the record key.
    pub fn x(&self) -> BigInt {
        parse_x_coordinate(&self.key)
    }

    /// The radix of the encoded value.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::MalformedInput` if `base` is not a non-negative
    /// decimal integer. The range `2..=36` is checked when decoding.
    pub fn radix(&self) -> Result<u32, ShareError> {
        let parsed = match &self.base {
            Scalar::Text(text) => text.trim().parse::<u32>().ok(),
            Scalar::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        };
        parsed.ok_or_else(|| {
            ShareError::malformed(format!(
                "Entry {} has an invalid base '{}'",
                self.key, self.base
            ))
        })
    }

    /// The encoded value as numeral text.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::MalformedInput` if `value` is a JSON number that is
    /// not an integer within 64 bits. Larger values must be written as strings.
    pub fn numeral(&self) -> Result<String, ShareError> {
        match &self.value {
            Scalar::Text(text) => Ok(text.clone()),
            Scalar::Number(number) if number.is_u64() || number.is_i64() => {
                Ok(number.to_string())
            }
            Scalar::Number(number) => Err(ShareError::malformed(format!(
                "Entry {} has a non-integer value {number}, write large values as strings",
                self.key
            ))),
        }
    }

    /// Decodes the share into a point.
    pub fn decode(&self) -> Result<Point, ShareError> {
        let radix = self.radix()?;
        let y = decode(&self.numeral()?, radix)?;
        Ok(Point { x: self.x(), y })
    }
}

/// A parsed share record: the threshold plus the encoded shares.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRecord {
    threshold: usize,
    declared_count: Option<u64>,
    shares: Vec<EncodedShare>,
}

impl ShareRecord {
    pub fn new(threshold: usize, shares: Vec<EncodedShare>) -> Self {
        Self {
            threshold,
            declared_count: None,
            shares,
        }
    }

    /// Reads and parses a record from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShareError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ShareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Reading share record from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ShareError> {
        let value: Value = serde_json::from_reader(reader)
            .map_err(|e| ShareError::malformed(format!("JSON parse error: {e}")))?;
        Self::from_value(value)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ShareError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ShareError::malformed(format!("JSON parse error: {e}")))?;
        Self::from_value(value)
    }

    /// Builds a record from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ShareError::MalformedInput` if the value is not an object, if
    /// `keys.k` is missing or not a positive integer, or if any share lacks its
    /// `base` or `value` field.
    pub fn from_value(value: Value) -> Result<Self, ShareError> {
        let Value::Object(fields) = value else {
            return Err(ShareError::malformed("Share record must be a JSON object"));
        };

        let (threshold, declared_count) = parse_keys(&fields)?;

        let shares = fields
            .into_iter()
            .filter(|(key, _)| key != KEYS_FIELD)
            .map(|(key, entry)| parse_share(key, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            threshold,
            declared_count,
            shares,
        })
    }

    /// The number of shares needed to reconstruct the secret (`keys.k`).
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The share count the record claims to hold (`keys.n`), if given.
    pub fn declared_count(&self) -> Option<u64> {
        self.declared_count
    }

    pub fn shares(&self) -> &[EncodedShare] {
        &self.shares
    }

    /// Decodes every share and returns them sorted by ascending x-coordinate.
    pub fn decode_points(&self) -> Result<PointSet, ShareError> {
        if let Some(n) = self.declared_count {
            if n != self.shares.len() as u64 {
                warn!(
                    "Record declares n = {} but holds {} shares",
                    n,
                    self.shares.len()
                );
            }
        }

        let points = self
            .shares
            .iter()
            .map(EncodedShare::decode)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PointSet::new(points))
    }
}

fn parse_keys(fields: &Map<String, Value>) -> Result<(usize, Option<u64>), ShareError> {
    let keys = fields
        .get(KEYS_FIELD)
        .ok_or_else(|| ShareError::malformed("JSON must contain keys.k"))?;

    let k = keys
        .get("k")
        .ok_or_else(|| ShareError::malformed("JSON must contain keys.k"))?;

    let threshold = k
        .as_u64()
        .and_then(|k| usize::try_from(k).ok())
        .ok_or_else(|| ShareError::malformed(format!("keys.k must be a positive integer, got {k}")))?;

    if threshold == 0 {
        return Err(ShareError::malformed("keys.k must be at least 1"));
    }

    let declared_count = keys.get("n").and_then(Value::as_u64);

    Ok((threshold, declared_count))
}

fn parse_share(key: String, entry: Value) -> Result<EncodedShare, ShareError> {
    let raw: RawShare = serde_json::from_value(entry)
        .map_err(|e| ShareError::malformed(format!("Entry {key} is not a share: {e}")))?;

    match (raw.base, raw.value) {
        (Some(base), Some(value)) => Ok(EncodedShare { key, base, value }),
        _ => Err(ShareError::malformed(format!(
            "Entry {key} missing base/value"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_polynomial::PolynomialError;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "10" },
        "2": { "base": "2", "value": "10101" },
        "3": { "base": "16", "value": "26" },
        "4": { "base": "7", "value": "115" }
    }"#;

    #[test]
    fn test_parse_record() {
        let record = ShareRecord::from_json_str(SAMPLE).unwrap();
        assert_eq!(record.threshold(), 3);
        assert_eq!(record.declared_count(), Some(4));
        assert_eq!(record.shares().len(), 4);
    }

    #[test]
    fn test_decode_points() {
        let record = ShareRecord::from_json_str(SAMPLE).unwrap();
        let points = record.decode_points().unwrap();
        assert_eq!(
            points.as_slice(),
            &[
                Point::new(1, 10),
                Point::new(2, 21),
                Point::new(3, 38),
                Point::new(4, 61)
            ]
        );
    }

    #[test]
    fn test_numeric_base_and_value() {
        let record = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 1 }, "5": { "base": 10, "value": 1234 } }"#,
        )
        .unwrap();
        let points = record.decode_points().unwrap();
        assert_eq!(points.as_slice(), &[Point::new(5, 1234)]);
    }

    #[test]
    fn test_numeric_value_must_be_integer() {
        for value in ["100000000000000000000", "2.5", "1e3"] {
            let json = format!(r#"{{ "keys": {{ "k": 1 }}, "0": {{ "base": "16", "value": {value} }} }}"#);
            let record = ShareRecord::from_json_str(&json).unwrap();
            assert!(
                matches!(record.decode_points(), Err(ShareError::MalformedInput { .. })),
                "value {value} should be rejected"
            );
        }
    }

    #[test]
    fn test_large_value_as_string() {
        let record = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 1 }, "0": { "base": "16", "value": "100000000000000000000" } }"#,
        )
        .unwrap();
        let points = record.decode_points().unwrap();
        assert_eq!(points.as_slice(), &[Point::new(0, BigInt::from(1) << 80)]);
    }

    #[test]
    fn test_missing_keys() {
        let err = ShareRecord::from_json_str(r#"{ "1": { "base": "10", "value": "1" } }"#)
            .unwrap_err();
        assert!(matches!(err, ShareError::MalformedInput { .. }));

        let err = ShareRecord::from_json_str(
            r#"{ "keys": { "n": 1 }, "1": { "base": "10", "value": "1" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShareError::MalformedInput { .. }));
        assert!(err.to_string().contains("keys.k"));
    }

    #[test]
    fn test_invalid_threshold() {
        for k in [r#""3""#, "-1", "0", "2.5"] {
            let json = format!(r#"{{ "keys": {{ "k": {k} }} }}"#);
            let err = ShareRecord::from_json_str(&json).unwrap_err();
            assert!(
                matches!(err, ShareError::MalformedInput { .. }),
                "k = {k} should be rejected"
            );
        }
    }

    #[test]
    fn test_missing_base_or_value() {
        let err = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 1 }, "1": { "value": "1" } }"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed input: Entry 1 missing base/value"
        );

        let err = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 1 }, "1": { "base": "10" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ShareError::MalformedInput { .. }));
    }

    #[test]
    fn test_entry_not_an_object() {
        let err = ShareRecord::from_json_str(r#"{ "keys": { "k": 1 }, "1": "10" }"#).unwrap_err();
        assert!(matches!(err, ShareError::MalformedInput { .. }));
    }

    #[test]
    fn test_not_json() {
        let err = ShareRecord::from_json_str("keys: k: 3").unwrap_err();
        assert!(matches!(err, ShareError::MalformedInput { .. }));

        let err = ShareRecord::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ShareError::MalformedInput { .. }));
    }

    #[test]
    fn test_invalid_base() {
        let record = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 1 }, "1": { "base": "ten", "value": "1" } }"#,
        )
        .unwrap();
        assert!(matches!(
            record.decode_points(),
            Err(ShareError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_unsupported_base() {
        let record = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 1 }, "1": { "base": "37", "value": "1" } }"#,
        )
        .unwrap();
        assert!(matches!(
            record.decode_points(),
            Err(ShareError::Polynomial(PolynomialError::UnsupportedRadix {
                radix: 37
            }))
        ));
    }

    #[test]
    fn test_invalid_digit() {
        let record = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 1 }, "1": { "base": "16", "value": "1G" } }"#,
        )
        .unwrap();
        let err = record.decode_points().unwrap_err();
        assert!(matches!(
            err,
            ShareError::Polynomial(PolynomialError::InvalidDigit { digit: 'G', radix: 16 })
        ));
        assert_eq!(err.to_string(), "Invalid digit 'G' for radix 16");
    }

    #[test]
    fn test_lenient_x_coordinate() {
        let record = ShareRecord::from_json_str(
            r#"{ "keys": { "k": 2 }, "x-12": { "base": "10", "value": "7" }, " 3 ": { "base": "10", "value": "8" } }"#,
        )
        .unwrap();
        let points = record.decode_points().unwrap();
        assert_eq!(points.as_slice(), &[Point::new(3, 8), Point::new(12, 7)]);
    }
}
