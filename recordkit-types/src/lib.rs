//! Core type definitions for RecordKit.
//!
//! This crate defines the small, dependency-free building blocks shared by
//! the record and validation engines:
//! - [`Value`]: a tagged union for loosely typed scalar input (form fields,
//!   query parameters, spreadsheet cells) with one conversion per target type
//! - Byte-level scanners for integer and decimal text
//!
//! Nothing here knows about records or rule grammars.

mod numeric;
mod value;

pub use numeric::{is_integer_text, is_numeric_text};
pub use value::Value;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when converting a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid UTF-8 in byte value")]
    InvalidUtf8,

    #[error("value {value} out of range for {target}")]
    OutOfRange { value: i64, target: &'static str },
}
