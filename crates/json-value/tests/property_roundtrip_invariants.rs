use json_tb_value::{annotate_array_lengths, stringify, JsonValue, Number, Object};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        any::<i64>().prop_map(JsonValue::from),
        any::<u64>().prop_map(JsonValue::from),
        "-?[1-9][0-9]{20,30}".prop_map(|text| JsonValue::Number(Number::BigInt(text))),
        (-1.0e12f64..1.0e12).prop_map(|f| JsonValue::Number(Number::Float(f))),
        ".*".prop_map(JsonValue::String),
    ]
}

fn value() -> impl Strategy<Value = JsonValue> {
    scalar().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{0,6}", inner), 0..8)
                .prop_map(|entries| JsonValue::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

/// Same shape as [`value`] but without any integer-first array.
fn value_without_integer_first_arrays() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Bool),
        ".*".prop_map(JsonValue::String),
        any::<i64>().prop_map(JsonValue::from),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            (any::<bool>(), prop::collection::vec(inner.clone(), 0..8)).prop_map(|(head, rest)| {
                let mut arr = vec![JsonValue::Bool(head)];
                arr.extend(rest);
                JsonValue::Array(arr)
            }),
            prop::collection::vec(("[a-z]{0,6}", inner), 0..8)
                .prop_map(|entries| JsonValue::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

proptest! {
    #[test]
    fn parse_of_stringify_is_identity(v in value()) {
        let text = stringify(&v).unwrap();
        prop_assert_eq!(JsonValue::parse(&text).unwrap(), v);
    }

    #[test]
    fn stringify_output_is_compact_ascii(v in value()) {
        let text = stringify(&v).unwrap();
        prop_assert!(text.is_ascii());
        prop_assert!(!text.contains(": "));
        prop_assert!(!text.contains(", "));
    }

    #[test]
    fn annotation_is_stable_without_integer_first_arrays(v in value_without_integer_first_arrays()) {
        let once = annotate_array_lengths(&v);
        prop_assert_eq!(&once, &v);
        prop_assert_eq!(annotate_array_lengths(&once), once);
    }

    #[test]
    fn integer_array_gains_exactly_one_length_word(items in prop::collection::vec(any::<i64>(), 1..32)) {
        let arr = JsonValue::Array(items.iter().copied().map(JsonValue::from).collect());
        let out = annotate_array_lengths(&arr);
        let out = out.as_array().unwrap();
        prop_assert_eq!(out.len(), items.len() + 1);
        prop_assert_eq!(&out[0], &JsonValue::from(items.len() as u64));
        prop_assert_eq!(&out[1..], &arr.as_array().unwrap()[..]);
    }
}
