use firedoc::{encode_document, encode_value, Number, Value};
use serde_json::json;

fn obj(pairs: Vec<(&str, Value)>) -> Vec<(String, Value)> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn booleans_never_encode_as_integers() -> Result<(), Box<dyn std::error::Error>> {
    for b in [true, false] {
        let wire = serde_json::to_value(encode_value(&Value::Bool(b)))?;
        assert_eq!(wire, json!({"booleanValue": b}));
        assert!(wire.get("integerValue").is_none());
    }
    Ok(())
}

#[test]
fn integers_encode_as_exact_digit_strings() -> Result<(), Box<dyn std::error::Error>> {
    // Past the 53-bit safe range in both directions.
    let cases: Vec<(Value, &str)> = vec![
        (Value::from(0i64), "0"),
        (Value::from(-7i64), "-7"),
        (Value::from(9_007_199_254_740_993i64), "9007199254740993"),
        (Value::from(i64::MIN), "-9223372036854775808"),
        (Value::from(u64::MAX), "18446744073709551615"),
    ];
    for (value, digits) in cases {
        let wire = serde_json::to_value(encode_value(&value))?;
        assert_eq!(wire, json!({"integerValue": digits}));
    }
    Ok(())
}

#[test]
fn integer_wire_digits_match_number_display() -> Result<(), Box<dyn std::error::Error>> {
    let numbers = [
        Number::I64(42),
        Number::I64(i64::MIN),
        Number::U64(u64::MAX),
    ];
    for n in numbers {
        let wire = serde_json::to_value(encode_value(&Value::Number(n)))?;
        assert_eq!(wire, json!({"integerValue": n.to_string()}));
    }
    Ok(())
}

#[test]
fn empty_array_keeps_empty_values_list() -> Result<(), Box<dyn std::error::Error>> {
    let doc = encode_document(&obj(vec![("attachments", Value::Array(vec![]))]));
    let wire = serde_json::to_value(&doc)?;
    assert_eq!(
        wire,
        json!({"fields": {"attachments": {"arrayValue": {"values": []}}}})
    );
    Ok(())
}

#[test]
fn worked_example_matches_wire_shape() -> Result<(), Box<dyn std::error::Error>> {
    let fields = obj(vec![
        ("a", Value::from(1i64)),
        ("b", Value::from(true)),
        ("c", Value::Null),
        ("d", Value::Array(vec![Value::from(1i64), Value::from("x")])),
        (
            "e",
            Value::Object(vec![("f".to_string(), Value::from(2.5))]),
        ),
    ]);
    let wire = serde_json::to_value(encode_document(&fields))?;
    assert_eq!(
        wire,
        json!({
            "fields": {
                "a": {"integerValue": "1"},
                "b": {"booleanValue": true},
                "c": {"nullValue": null},
                "d": {"arrayValue": {"values": [
                    {"integerValue": "1"},
                    {"stringValue": "x"}
                ]}},
                "e": {"mapValue": {"fields": {"f": {"doubleValue": 2.5}}}}
            }
        })
    );
    Ok(())
}

#[test]
fn nested_arrays_recurse() -> Result<(), Box<dyn std::error::Error>> {
    let fields = obj(vec![(
        "grid",
        Value::Array(vec![
            Value::Array(vec![Value::from(1i64), Value::from(2i64)]),
            Value::Array(vec![]),
        ]),
    )]);
    let wire = serde_json::to_value(encode_document(&fields))?;
    assert_eq!(
        wire,
        json!({"fields": {"grid": {"arrayValue": {"values": [
            {"arrayValue": {"values": [
                {"integerValue": "1"},
                {"integerValue": "2"}
            ]}},
            {"arrayValue": {"values": []}}
        ]}}}})
    );
    Ok(())
}

#[test]
fn unsupported_fields_are_silently_dropped() -> Result<(), Box<dyn std::error::Error>> {
    let fields = obj(vec![
        ("kept", Value::from("yes")),
        ("dropped", Value::Unsupported),
        (
            "list",
            Value::Array(vec![Value::Unsupported, Value::from(3i64)]),
        ),
    ]);
    let wire = serde_json::to_value(encode_document(&fields))?;
    assert_eq!(
        wire,
        json!({"fields": {
            "kept": {"stringValue": "yes"},
            "list": {"arrayValue": {"values": [{"integerValue": "3"}]}}
        }})
    );
    Ok(())
}

#[test]
fn json_literal_numbers_classify_by_variant() {
    let v = Value::from(json!({"count": 12, "rating": 4.5, "flag": true}));
    let Value::Object(fields) = v else {
        panic!("expected object")
    };
    let lookup = |k: &str| fields.iter().find(|(key, _)| key == k).map(|(_, v)| v);
    assert_eq!(lookup("count"), Some(&Value::Number(Number::I64(12))));
    assert_eq!(lookup("rating"), Some(&Value::Number(Number::F64(4.5))));
    assert_eq!(lookup("flag"), Some(&Value::Bool(true)));
}
