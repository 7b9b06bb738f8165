//! The rule grammar.
//!
//! `kind` or `kind|min-max`, comma-separated. Either bound may be omitted
//! and defaults to 0, which means unbounded on that side. Zero itself can
//! therefore never be a real bound.

use recordkit_types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a clause checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Must,
    Price,
    Int,
    Num,
    Date,
    #[serde(rename = "string")]
    StringLen,
    Phone,
    Email,
    Age,
    Cn,
    En,
    /// A kind name the engine does not know. Always passes.
    Unknown(String),
}

impl ConstraintKind {
    /// Maps a grammar keyword to its kind. Matching is case-sensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "must" => Self::Must,
            "price" => Self::Price,
            "int" => Self::Int,
            "num" => Self::Num,
            "date" => Self::Date,
            "string" => Self::StringLen,
            "phone" => Self::Phone,
            "email" => Self::Email,
            "age" => Self::Age,
            "cn" => Self::Cn,
            "en" => Self::En,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The grammar keyword for this kind.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Must => "must",
            Self::Price => "price",
            Self::Int => "int",
            Self::Num => "num",
            Self::Date => "date",
            Self::StringLen => "string",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Age => "age",
            Self::Cn => "cn",
            Self::En => "en",
            Self::Unknown(name) => name,
        }
    }

    /// Whether `min`/`max` mean anything for this kind.
    #[must_use]
    pub fn takes_bounds(&self) -> bool {
        matches!(self, Self::Int | Self::Num | Self::StringLen)
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One parsed clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    /// Lower bound; enforced only when greater than zero.
    pub min: f64,
    /// Upper bound; enforced only when greater than zero.
    pub max: f64,
    #[serde(default)]
    min_text: String,
    #[serde(default)]
    max_text: String,
}

impl Constraint {
    /// A constraint with numeric bounds (0 for unbounded).
    #[must_use]
    pub fn new(kind: ConstraintKind, min: f64, max: f64) -> Self {
        Self {
            kind,
            min,
            max,
            min_text: min.to_string(),
            max_text: max.to_string(),
        }
    }

    /// A constraint without bounds.
    #[must_use]
    pub fn unbounded(kind: ConstraintKind) -> Self {
        Self::new(kind, 0.0, 0.0)
    }

    /// Parses a single clause such as `int|1-10`.
    #[must_use]
    pub fn parse(clause: &str) -> Self {
        let parts: Vec<&str> = clause.split('|').collect();
        let kind = ConstraintKind::from_keyword(parts[0]);

        let (min_text, max_text) = match parts.as_slice() {
            [_, bounds] => {
                let mut sides = bounds.split('-');
                (sides.next().unwrap_or(""), sides.next().unwrap_or(""))
            }
            _ => ("", ""),
        };
        let (min, max) = match kind {
            ConstraintKind::Num => (decimal_bound(min_text), decimal_bound(max_text)),
            _ => (integer_bound(min_text), integer_bound(max_text)),
        };

        Self {
            kind,
            min,
            max,
            min_text: min_text.to_string(),
            max_text: max_text.to_string(),
        }
    }

    /// Whether the lower bound is enforced.
    #[must_use]
    pub fn has_min(&self) -> bool {
        self.min > 0.0
    }

    /// Whether the upper bound is enforced.
    #[must_use]
    pub fn has_max(&self) -> bool {
        self.max > 0.0
    }

    /// The lower bound as written in the grammar.
    #[must_use]
    pub fn min_text(&self) -> &str {
        &self.min_text
    }

    /// The upper bound as written in the grammar.
    #[must_use]
    pub fn max_text(&self) -> &str {
        &self.max_text
    }
}

fn integer_bound(text: &str) -> f64 {
    Value::from(text).to_i64().map_or(0.0, |n| n as f64)
}

fn decimal_bound(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}

/// An ordered list of constraints parsed from one grammar string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    constraints: Vec<Constraint>,
}

impl RuleSet {
    #[must_use]
    pub fn new(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether the rule set rejects the empty string.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.constraints.iter().any(|c| c.kind == ConstraintKind::Must)
    }
}

/// Parses a grammar string. Never fails: empty clauses are dropped and
/// unknown kinds become [`ConstraintKind::Unknown`].
#[must_use]
pub fn parse_rules(grammar: &str) -> RuleSet {
    let constraints = grammar
        .split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(Constraint::parse)
        .collect();
    RuleSet { constraints }
}
