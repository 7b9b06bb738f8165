//! Constraint evaluation.

use crate::cache::RuleCache;
use crate::error::{Failure, FieldViolation, Violation};
use crate::messages::{Locale, Messages};
use crate::patterns;
use crate::rule::{Constraint, ConstraintKind, RuleSet};
use recordkit_types::{Value, is_integer_text, is_numeric_text};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

pub(crate) const DEFAULT_CACHE_CAPACITY: usize = 256;

const MAX_AGE: f64 = 140.0;

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Language of failure messages.
    pub locale: Locale,
    /// Maximum number of cached grammar strings; 0 disables the cache.
    pub cache_capacity: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl ValidatorConfig {
    /// Loads a config from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Evaluates rule grammars against values.
///
/// Cheap to share: `Send + Sync`, with an internal cache of parsed rules.
#[derive(Debug)]
pub struct Validator {
    messages: Messages,
    cache: RuleCache,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            messages: Messages::new(config.locale),
            cache: RuleCache::new(config.cache_capacity),
        }
    }

    #[must_use]
    pub fn messages(&self) -> Messages {
        self.messages
    }

    #[must_use]
    pub fn cache(&self) -> &RuleCache {
        &self.cache
    }

    /// Checks `value` against `rules`, returning the first violation.
    pub fn check(&self, value: &str, rules: &str) -> Result<(), Violation> {
        self.cache.get_or_parse(rules).evaluate(value, &self.messages)
    }

    /// `(passed, message)`; `message` is empty iff `passed`.
    #[must_use]
    pub fn validate(&self, value: &str, rules: &str) -> (bool, String) {
        match self.check(value, rules) {
            Ok(()) => (true, String::new()),
            Err(violation) => (false, violation.message),
        }
    }

    /// Validates `(field, value, rules)` triples in order, stopping at the
    /// first field that fails.
    pub fn validate_fields<'a, I>(&self, fields: I) -> Result<(), FieldViolation>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        for (field, value, rules) in fields {
            self.check(value, rules).map_err(|violation| FieldViolation {
                field: field.to_string(),
                violation,
            })?;
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

/// Validates `value` against the grammar `rules` with the default
/// configuration. Returns `(passed, message)`.
///
/// ```
/// use recordkit_validate::validate;
///
/// assert_eq!(validate("19.99", "price"), (true, String::new()));
/// assert!(!validate("", "must,int").0);
/// ```
#[must_use]
pub fn validate(value: &str, rules: &str) -> (bool, String) {
    DEFAULT_VALIDATOR.validate(value, rules)
}

impl RuleSet {
    /// Evaluates every constraint left to right; the first failure wins.
    pub fn evaluate(&self, value: &str, messages: &Messages) -> Result<(), Violation> {
        for constraint in self.constraints() {
            if let Err(failure) = check(constraint, value) {
                let message = messages.render(&failure);
                debug!(kind = %constraint.kind, ?failure, "value rejected");
                return Err(Violation {
                    kind: constraint.kind.clone(),
                    failure,
                    message,
                });
            }
        }
        Ok(())
    }
}

fn check(constraint: &Constraint, value: &str) -> Result<(), Failure> {
    if constraint.kind == ConstraintKind::Must {
        return if value.is_empty() { Err(Failure::Required) } else { Ok(()) };
    }
    // Every other kind accepts the empty value.
    if value.is_empty() {
        return Ok(());
    }

    match &constraint.kind {
        ConstraintKind::Must => Ok(()),
        ConstraintKind::Price => ensure(patterns::is_price(value), Failure::Price),
        ConstraintKind::Int => {
            if !is_integer_text(value) {
                return Err(Failure::NotInteger);
            }
            let n = Value::from(value).to_i64().map_err(|_| Failure::NotInteger)?;
            check_range(constraint, n as f64, Failure::TooSmall, Failure::TooLarge)
        }
        ConstraintKind::Num => {
            if !is_numeric_text(value) {
                return Err(Failure::NotNumber);
            }
            let n = value.parse::<f64>().map_err(|_| Failure::NotNumber)?;
            check_range(constraint, n, Failure::TooSmall, Failure::TooLarge)
        }
        // Spreadsheet exports hand dates over as serial numbers.
        ConstraintKind::Date => ensure(
            is_integer_text(value) || patterns::is_date(value),
            Failure::Date,
        ),
        ConstraintKind::StringLen => {
            let len = value.chars().count() as f64;
            check_range(constraint, len, Failure::TooShort, Failure::TooLong)
        }
        ConstraintKind::Phone => ensure(patterns::is_phone(value), Failure::Phone),
        ConstraintKind::Email => ensure(patterns::is_email(value), Failure::Email),
        ConstraintKind::Age => {
            if !is_numeric_text(value) {
                return Err(Failure::Age);
            }
            let age = value.parse::<f64>().map_err(|_| Failure::Age)?;
            ensure((0.0..=MAX_AGE).contains(&age), Failure::Age)
        }
        ConstraintKind::Cn => ensure(patterns::is_han(value), Failure::Chinese),
        ConstraintKind::En => ensure(patterns::is_latin(value), Failure::English),
        ConstraintKind::Unknown(_) => Ok(()),
    }
}

fn ensure(ok: bool, failure: Failure) -> Result<(), Failure> {
    if ok { Ok(()) } else { Err(failure) }
}

fn check_range(
    constraint: &Constraint,
    n: f64,
    below: fn(String) -> Failure,
    above: fn(String) -> Failure,
) -> Result<(), Failure> {
    if constraint.has_min() && n < constraint.min {
        return Err(below(constraint.min_text().to_string()));
    }
    if constraint.has_max() && n > constraint.max {
        return Err(above(constraint.max_text().to_string()));
    }
    Ok(())
}
