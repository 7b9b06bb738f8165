//! Property-based tests for the rule grammar and evaluation.

use proptest::prelude::*;
use recordkit_validate::{parse_rules, validate};

const KINDS: [&str; 10] = [
    "price", "int", "num", "date", "string", "phone", "email", "age", "cn", "en",
];

fn clause_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(KINDS.to_vec()),
        proptest::option::of((0u32..50, 0u32..50)),
    )
        .prop_map(|(kind, bounds)| match bounds {
            Some((min, max)) => format!("{kind}|{min}-{max}"),
            None => kind.to_string(),
        })
}

fn grammar_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(clause_strategy(), 0..5).prop_map(|clauses| clauses.join(","))
}

proptest! {
    /// Parsing arbitrary text never panics and never yields empty clauses.
    #[test]
    fn parser_is_total(grammar in ".*") {
        let rules = parse_rules(&grammar);
        prop_assert!(rules.len() <= grammar.split(',').count());
    }

    /// Evaluating arbitrary input never panics and keeps the message contract.
    #[test]
    fn message_empty_iff_passed(value in ".{0,24}", grammar in ".{0,24}") {
        let (ok, message) = validate(&value, &grammar);
        prop_assert_eq!(ok, message.is_empty());
    }

    /// Without `must`, the empty value passes any grammar.
    #[test]
    fn empty_value_passes_without_must(grammar in grammar_strategy()) {
        prop_assert_eq!(validate("", &grammar), (true, String::new()));
    }

    /// Integers inside the bounds pass, outside fail.
    #[test]
    fn int_bounds(n in 0u32..1000, min in 1u32..500, span in 0u32..500) {
        let max = min + span;
        let (ok, _) = validate(&n.to_string(), &format!("int|{min}-{max}"));
        prop_assert_eq!(ok, n >= min && n <= max);
    }
}
