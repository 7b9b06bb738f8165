use crate::rule::ConstraintKind;
use thiserror::Error;

/// Why a clause rejected a value. Bound-carrying variants hold the bound as
/// written in the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    Required,
    Price,
    NotInteger,
    NotNumber,
    TooSmall(String),
    TooLarge(String),
    Date,
    TooShort(String),
    TooLong(String),
    Phone,
    Email,
    Age,
    Chinese,
    English,
}

/// The first clause a value failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
    pub kind: ConstraintKind,
    pub failure: Failure,
    /// Localized, user-facing message.
    pub message: String,
}

/// A violation attributed to a named form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {violation}")]
pub struct FieldViolation {
    pub field: String,
    #[source]
    pub violation: Violation,
}
