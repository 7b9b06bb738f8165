//! Rule-grammar validation for RecordKit.
//!
//! Constraints on a single form value are written as a compact string:
//! comma-separated clauses, each a kind optionally followed by bounds.
//!
//! ```text
//! must,int|1-10        required integer between 1 and 10
//! string|2-20,en       2 to 20 ASCII letters, may be empty
//! must,phone           required mobile number
//! ```
//!
//! - [`parse_rules`] turns a grammar string into a [`RuleSet`]
//! - [`Validator`] evaluates rule sets left to right, stopping at the first
//!   failing clause, with localized [`Messages`] and a compiled-rule cache
//! - [`validate`] is the one-call form returning `(passed, message)`
//!
//! Every kind except `must` accepts the empty string. Unknown kinds always
//! pass.
//!
//! # Example
//!
//! ```
//! use recordkit_validate::validate;
//!
//! assert_eq!(validate("5", "int|1-10"), (true, String::new()));
//! assert!(!validate("15", "int|1-10").0);
//! assert!(!validate("", "must").0);
//! ```

mod cache;
mod engine;
mod error;
mod messages;
mod patterns;
mod rule;

pub use cache::RuleCache;
pub use engine::{Validator, ValidatorConfig, validate};
pub use error::{Failure, FieldViolation, Violation};
pub use messages::{Locale, Messages};
pub use rule::{Constraint, ConstraintKind, RuleSet, parse_rules};
