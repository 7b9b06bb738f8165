//! Loosely typed scalar values.
//!
//! Upstream layers hand over integers, floats, strings, booleans and raw
//! bytes more or less interchangeably. [`Value`] names each case explicitly
//! and offers one conversion per target type, each returning a typed result
//! instead of aborting on unsupported input.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar of one of the supported input categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// Converts to `i64`.
    ///
    /// Floats are truncated toward zero, booleans map to 1/0, text is parsed
    /// as a base-10 integer. Empty text converts to 0.
    pub fn to_i64(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Float(f) => Ok(f.trunc() as i64),
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Str(s) => parse_i64(s, true),
            Self::Bytes(bytes) => parse_i64(utf8(bytes)?, true),
        }
    }

    /// Converts to `i32`.
    ///
    /// Same rules as [`Value::to_i64`], except that empty text is rejected
    /// and values outside the `i32` range are an error.
    pub fn to_i32(&self) -> Result<i32> {
        let wide = match self {
            Self::Str(s) => parse_i64(s, false)?,
            Self::Bytes(bytes) => parse_i64(utf8(bytes)?, false)?,
            other => other.to_i64()?,
        };
        i32::try_from(wide).map_err(|_| Error::OutOfRange {
            value: wide,
            target: "i32",
        })
    }

    /// Renders the value as text.
    ///
    /// Floats are truncated to an integer first; booleans render as `"1"`
    /// or `"0"`; bytes are decoded lossily.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Float(f) => (f.trunc() as i64).to_string(),
            Self::Str(s) => s.clone(),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Self::Bool(b) => String::from(if *b { "1" } else { "0" }),
        }
    }

    /// Returns `true` for empty text or empty bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Bytes(bytes) => bytes.is_empty(),
            _ => false,
        }
    }
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
}

fn parse_i64(s: &str, empty_is_zero: bool) -> Result<i64> {
    if s.is_empty() && empty_is_zero {
        return Ok(0);
    }
    s.parse::<i64>()
        .map_err(|_| Error::InvalidNumber(s.to_string()))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}
