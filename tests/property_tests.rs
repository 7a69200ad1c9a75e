//! Property tests for the invariants the pipeline guarantees.

use proptest::prelude::*;

use apex::{parse, validate, Error, ParseOptions, RULES};

fn check(text: &str) -> Vec<Error> {
    let document = parse(text, ParseOptions::default()).expect("parse");
    validate(&document, RULES)
}

proptest! {
    /// Distinct non-negative indexes always validate.
    #[test]
    fn distinct_enum_indexes_are_accepted(indexes in proptest::collection::hash_set(0u16..500, 1..12)) {
        let values: Vec<String> = indexes
            .iter()
            .enumerate()
            .map(|(i, index)| format!("V{} = {}", i, index))
            .collect();
        let text = format!("namespace \"m\"  enum E {{ {} }}", values.join("  "));
        prop_assert!(check(&text).is_empty(), "unexpected errors for {}", text);
    }

    /// A repeated index is always caught, wherever it lands.
    #[test]
    fn duplicate_enum_indexes_are_rejected(count in 2usize..10, dup in 0usize..8) {
        let dup = dup % count;
        let values: Vec<String> = (0..count)
            .map(|i| format!("V{} = {}", i, i))
            .chain(std::iter::once(format!("EXTRA = {}", dup)))
            .collect();
        let text = format!("namespace \"m\"  enum E {{ {} }}", values.join("  "));
        let errors = check(&text);
        prop_assert_eq!(errors.len(), 1);
        prop_assert!(errors[0].message.contains("duplicate index"));
    }

    /// Annotation-argument validation is stable under permutation of the
    /// argument order.
    #[test]
    fn argument_order_does_not_matter(order in Just(vec![0usize, 1, 2]).prop_shuffle()) {
        let arguments = ["a: 1", "b: \"x\"", "c: true"];
        let rendered: Vec<&str> = order.iter().map(|&i| arguments[i]).collect();
        let text = format!(
            "namespace \"m\"\n\
             directive @opts(a: u32, b: string, c: bool) on FIELD\n\
             type T {{ f: string @opts({}) }}",
            rendered.join(", ")
        );
        prop_assert!(check(&text).is_empty(), "unexpected errors for {}", text);
    }

    /// Running the rules in any order produces the same error set.
    #[test]
    fn validation_is_rule_order_independent(order in Just((0..RULES.len()).collect::<Vec<_>>()).prop_shuffle()) {
        let text = "namespace \"m\"\n\
                    type T { a: Unknown }\n\
                    type T { b: string }\n\
                    enum e { A = 0  B = 0 }";
        let document = parse(text, ParseOptions::default()).expect("parse");

        let shuffled: Vec<apex::ValidationRule> = order.iter().map(|&i| RULES[i]).collect();

        let mut expected: Vec<String> = validate(&document, RULES).into_iter().map(|e| e.message).collect();
        let mut actual: Vec<String> = validate(&document, &shuffled).into_iter().map(|e| e.message).collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }

    /// Any i64 literal conforms to a signed 64-bit parameter; negatives are
    /// rejected only by unsigned parameters.
    #[test]
    fn integer_conformance_tracks_signedness(value in any::<i32>()) {
        let text = format!(
            "namespace \"m\"\n\
             directive @signed(v: i64) on FIELD\n\
             directive @unsigned(v: u64) on FIELD\n\
             type T {{ f: string @signed(v: {0}) @unsigned(v: {0}) }}",
            value
        );
        let errors = check(&text);
        if value < 0 {
            prop_assert_eq!(errors.len(), 1);
            prop_assert!(errors[0].message.contains("non-negative"));
        } else {
            prop_assert!(errors.is_empty());
        }
    }

    /// Lower-camel names with an uppercase tail segment survive the pascal
    /// and camel case rules exactly as cased.
    #[test]
    fn pascal_case_names_validate(name in "[A-Z][a-z0-9]{0,8}([A-Z][a-z0-9]{1,4}){0,2}") {
        let text = format!("namespace \"m\"  type {} {{ x: string }}", name);
        prop_assert!(check(&text).is_empty(), "false positive for {}", name);
    }

    /// The converted namespace is a pure function of the document: converting
    /// twice yields identical models, and the JSON form round-trips.
    #[test]
    fn conversion_is_deterministic_and_round_trips(field_count in 1usize..6) {
        let fields: Vec<String> = (0..field_count)
            .map(|i| format!("f{}: string", i))
            .collect();
        let text = format!("namespace \"m\"  type T {{ {} }}", fields.join("  "));
        let document = parse(text.as_str(), ParseOptions::default()).expect("parse");

        let first = apex::model::convert(&document).expect("convert");
        let second = apex::model::convert(&document).expect("convert");
        prop_assert_eq!(&first, &second);

        let json = serde_json::to_string(&first).expect("serialize");
        let back: apex::model::Namespace = serde_json::from_str(&json).expect("deserialize");
        prop_assert_eq!(&first, &back);
    }
}
