//! Error types for the record model.

use thiserror::Error;

/// Result type for named field access.
pub type FieldResult<T> = Result<T, FieldError>;

/// Result type for deep copies.
pub type CopyResult<T> = Result<T, CopyError>;

/// Errors from setting a field by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The record has no field with this name.
    #[error("no field named `{0}`")]
    NotFound(String),

    /// The field exists but its table entry has no mutator.
    #[error("field `{0}` is read-only")]
    ReadOnly(String),

    /// The supplied value does not have the field's declared type.
    #[error("field `{field}` expects {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors from [`deep_copy`](crate::deep_copy).
#[derive(Debug, Error)]
pub enum CopyError {
    /// The source holds something the encoder cannot represent.
    #[error("encoding failed: {0}")]
    Encoding(#[source] ciborium::ser::Error<std::io::Error>),

    /// The encoded stream does not fit the destination's shape.
    #[error("decoding failed: {0}")]
    Decoding(#[source] ciborium::de::Error<std::io::Error>),
}
