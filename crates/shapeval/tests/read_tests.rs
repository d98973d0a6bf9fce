//! Tests for reading printed literals back into values

use pretty_assertions::assert_eq;
use shapeval::*;

fn round_trip(src: &str) -> String {
    read_value(src).unwrap().to_string()
}

#[test]
fn test_canonical_forms_are_stable() {
    for src in [
        "null",
        "true",
        "2",
        "-0.125",
        "inf",
        "-inf",
        "nan",
        r#""hello\nworld""#,
        "[]",
        "{}",
        "[1, [2, [3]]]",
        r#"{a: 1, b: "two", c: [true, null]}"#,
        r#"{plain: {inner: []}, "two words": 1}"#,
    ] {
        assert_eq!(round_trip(src), src);
    }
}

#[test]
fn test_reader_normalises() {
    assert_eq!(round_trip("{ b:2 , a:1 }"), "{a: 1, b: 2}");
    assert_eq!(round_trip("(1, 2)"), "[1, 2]");
    assert_eq!(round_trip("2.0"), "2");
    assert_eq!(round_trip("1e3"), "1000");
    assert_eq!(round_trip(r#"{"x": 1}"#), "{x: 1}");
}

#[test]
fn test_printed_values_read_back_equal() {
    let values = vec![
        Value::Number(0.1),
        Value::Number(-1234.5678),
        Value::Number(1e21),
        Value::Number(1e-7),
        Value::from("quote \" backslash \\ tab \t unicode é"),
        Value::record(
            Record::new()
                .with_field("_", Value::Null)
                .with_field("9lives", Value::Bool(true))
                .with_field("", Value::list(vec![])),
        ),
    ];

    for value in values {
        let printed = value.to_string();
        assert_eq!(read_value(&printed).unwrap(), value, "{}", printed);

        let compact = value.to_source_with(PrintContext::compact());
        assert_eq!(read_value(&compact).unwrap(), value, "{}", compact);
    }
}

#[test]
fn test_functions_do_not_read_back() {
    let printed = Value::function("f", 0, |_| Ok(Value::Null)).to_string();
    assert_eq!(printed, "<function f>");
    assert!(read_value(&printed).is_err());
}

#[test]
fn test_read_error_into_crate_error() {
    fn parse(src: &str) -> Result<Value> {
        Ok(read_value(src)?)
    }

    let err = parse("{a: 1,, b: 2}").unwrap_err();
    assert!(matches!(err, Error::Read(ReadError::UnexpectedToken { .. })));
}

#[test]
fn test_default_depth_limit() {
    let deep = format!("{}{}", "[".repeat(300), "]".repeat(300));
    assert_eq!(
        read_value(&deep),
        Err(ReadError::TooDeep { limit: 256 })
    );

    let ctx = ReadContext::with_max_depth(400);
    assert!(read_value_with(&deep, &ctx).is_ok());
}

#[test]
fn test_compact_output_reads_back() {
    let value = Value::record(
        Record::new()
            .with_field("a", Value::Number(-1.0))
            .with_field("b c", Value::list(vec![Value::Number(-0.5)])),
    );

    let compact = value.to_source_with(PrintContext::compact());
    assert_eq!(compact, r#"{a:-1,"b c":[-0.5]}"#);
    assert_eq!(read_value(&compact).unwrap(), value);
    assert_eq!(
        read_value(&compact).unwrap().to_source_with(PrintContext::compact()),
        compact
    );
}

#[test]
fn test_deep_output_needs_matching_read_depth() {
    let deep = (0..300).fold(Value::Number(1.0), |inner, _| Value::list(vec![inner]));
    let printed = deep.to_string();

    assert_eq!(
        read_value(&printed),
        Err(ReadError::TooDeep { limit: 256 })
    );

    let ctx = ReadContext::with_max_depth(300);
    assert_eq!(read_value_with(&printed, &ctx).unwrap(), deep);
}
