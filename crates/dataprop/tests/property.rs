//! Tests for per-cell data properties
//!
//! Covers:
//! - Typecode resolution with and without conversion
//! - Null handling and the configured none value
//! - Tab expansion
//! - String width, digit counts and sign width
//! - Summary text and serialization

use chrono::{NaiveDate, TimeZone};
use chrono_tz::Tz;
use dataprop::{
    Align, DataProperty, DataPropertyError, DateTimeValue, FormatSpec, PropertyConfig, TimezoneTable,
    Typecode, Value,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn prop(value: impl Into<Value>) -> DataProperty {
    DataProperty::new(value, &PropertyConfig::default())
        .unwrap_or_else(|e| panic!("Failed to build property: {e}"))
}

// === Typecode ===

#[rstest]
#[case(Value::Int(i64::MAX), true, Value::Int(i64::MAX), Typecode::Int)]
#[case(Value::Int(-i64::MAX), false, Value::Int(-i64::MAX), Typecode::Int)]
#[case(Value::string((-i64::MAX).to_string()), true, Value::Int(-i64::MAX), Typecode::Int)]
#[case(Value::string(i64::MAX.to_string()), false, Value::string(i64::MAX.to_string()), Typecode::String)]
#[case(Value::string("1.1"), true, Value::Float(1.1), Typecode::Float)]
#[case(
    Value::string("123456789012345678901234567890"),
    true,
    Value::string("123456789012345678901234567890"),
    Typecode::String
)]
#[case(Value::string("9223372036854775808"), true, Value::string("9223372036854775808"), Typecode::String)]
#[case(Value::string("-1.1"), false, Value::string("-1.1"), Typecode::String)]
#[case(Value::string("a"), true, Value::string("a"), Typecode::String)]
#[case(Value::string("a"), false, Value::string("a"), Typecode::String)]
#[case(Value::None, true, Value::None, Typecode::None)]
#[case(Value::None, false, Value::None, Typecode::None)]
fn test_data_and_typecode(
    #[case] value: Value,
    #[case] attempt_conversion: bool,
    #[case] expected_data: Value,
    #[case] expected_typecode: Typecode,
) {
    let config = PropertyConfig::default().with_attempt_conversion(attempt_conversion);
    let dp = DataProperty::new(value, &config).unwrap();
    assert_eq!(dp.data(), &expected_data);
    assert_eq!(dp.typecode(), expected_typecode);
}

#[rstest]
#[case(Value::None, Value::None)]
#[case(Value::string("null"), Value::string("null"))]
#[case(Value::string(""), Value::string(""))]
#[case(Value::Int(0), Value::Int(0))]
fn test_none_value(#[case] none_value: Value, #[case] expected: Value) {
    let config = PropertyConfig::default().with_none_value(none_value);
    let dp = DataProperty::new(Value::None, &config).unwrap();
    assert_eq!(dp.data(), &expected);
    assert_eq!(dp.typecode(), Typecode::None);
}

#[rstest]
#[case(Value::Float(f64::INFINITY), true)]
#[case(Value::Float(f64::INFINITY), false)]
#[case(Value::Float(f64::NEG_INFINITY), true)]
#[case(Value::Float(f64::NAN), true)]
#[case(Value::Float(f64::NAN), false)]
#[case(Value::string("inf"), true)]
#[case(Value::string("nan"), true)]
fn test_non_finite_overflows(#[case] value: Value, #[case] attempt_conversion: bool) {
    let config = PropertyConfig::default().with_attempt_conversion(attempt_conversion);
    let err = DataProperty::new(value, &config).unwrap_err();
    assert!(matches!(err, DataPropertyError::Overflow { .. }), "{err:?}");
}

#[test]
fn test_non_finite_text_without_conversion_is_text() {
    let config = PropertyConfig::default().with_attempt_conversion(false);
    let dp = DataProperty::new("inf", &config).unwrap();
    assert_eq!(dp.typecode(), Typecode::String);
}

#[test]
fn test_datetime_text() {
    let dp = prop("2017-01-01 00:00:00");
    assert_eq!(dp.typecode(), Typecode::DateTime);
    assert_eq!(dp.align(), Align::Left);
    assert_eq!(dp.str_len(), 19);
    assert_eq!(dp.integer_digits(), None);
    assert_eq!(dp.format_spec(), FormatSpec::Text);
}

#[test]
fn test_datetime_relocalized_into_named_zone() {
    let dp = prop("2017-01-01 00:00:00-0800");
    let expected = Tz::US__Pacific
        .from_local_datetime(&NaiveDate::from_ymd_opt(2017, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap())
        .unwrap();
    assert_eq!(dp.data(), &Value::DateTime(DateTimeValue::Zoned(expected)));
}

#[test]
fn test_datetime_unknown_offset_stays_fixed() {
    let dp = prop("2017-01-01 00:00:00+0900");
    match dp.data() {
        Value::DateTime(DateTimeValue::Fixed(dt)) => assert_eq!(dt.offset().local_minus_utc(), 9 * 3600),
        other => panic!("Expected fixed-offset datetime, got: {other:?}"),
    }
}

#[test]
fn test_datetime_empty_timezone_table() {
    let config = PropertyConfig::default().with_timezones(TimezoneTable::empty());
    let dp = DataProperty::new("2017-01-01 00:00:00-0800", &config).unwrap();
    assert!(matches!(dp.data(), Value::DateTime(DateTimeValue::Fixed(_))));
}

// === Tab expansion ===

#[rstest]
#[case("a\tb", Some(2), "a  b")]
#[case("\ta\t\tb\tc\t", Some(2), "  a    b  c  ")]
#[case("a\tb", Some(4), "a    b")]
#[case("a\tb", None, "a\tb")]
#[case("a\tb", Some(0), "a\tb")]
fn test_tab_expansion(#[case] value: &str, #[case] tab_length: Option<usize>, #[case] expected: &str) {
    let config = match tab_length {
        Some(tab_length) => PropertyConfig::default().with_tab_expansion(tab_length),
        None => PropertyConfig::default().without_tab_expansion(),
    };
    let dp = DataProperty::new(value, &config).unwrap();
    assert_eq!(dp.data(), &Value::string(expected));
    assert_eq!(dp.str_len(), expected.chars().count());
    assert_eq!(dp.raw(), &Value::string(value));
}

// === Alignment ===

#[rstest]
#[case(Value::Int(1), Align::Right)]
#[case(Value::Float(1.0), Align::Right)]
#[case(Value::string("a"), Align::Left)]
#[case(Value::None, Align::Left)]
fn test_align(#[case] value: Value, #[case] expected: Align) {
    assert_eq!(prop(value).align(), expected);
}

// === Metrics ===

#[rstest]
#[case(Value::Int(1), 1)]
#[case(Value::Int(-1), 2)]
#[case(Value::Float(1.0), 3)]
#[case(Value::Float(-1.0), 4)]
#[case(Value::Float(12.34), 5)]
#[case(Value::string("000"), 1)]
#[case(Value::string("123456789"), 9)]
#[case(Value::string("-123456789"), 10)]
#[case(Value::string("a"), 1)]
#[case(Value::None, 4)]
fn test_str_len(#[case] value: Value, #[case] expected: usize) {
    assert_eq!(prop(value).str_len(), expected);
}

#[test]
fn test_oversized_integer_text_is_measured_as_written() {
    let dp = prop("123456789012345678901234567890");
    assert_eq!(dp.formatted(), "123456789012345678901234567890");
    assert_eq!(dp.str_len(), 30);
    assert_eq!(dp.integer_digits(), None);
    assert_eq!(dp.align(), Align::Left);
}

#[test]
fn test_str_len_of_none_value() {
    let config = PropertyConfig::default().with_none_value("null");
    assert_eq!(DataProperty::new(Value::None, &config).unwrap().str_len(), 4);
}

#[rstest]
#[case(Value::Int(1), Some(1), Some(0))]
#[case(Value::Float(1.0), Some(1), Some(1))]
#[case(Value::Float(12.34), Some(2), Some(2))]
#[case(Value::None, None, None)]
#[case(Value::string("a"), None, None)]
fn test_digits(
    #[case] value: Value,
    #[case] integer_digits: Option<usize>,
    #[case] decimal_places: Option<usize>,
) {
    let dp = prop(value);
    assert_eq!(dp.integer_digits(), integer_digits);
    assert_eq!(dp.decimal_places(), decimal_places);
}

#[rstest]
#[case(Value::Int(2147483648), 0)]
#[case(Value::Int(0), 0)]
#[case(Value::Int(-1), 1)]
#[case(Value::Float(-0.01), 1)]
#[case(Value::string("2147483648"), 0)]
#[case(Value::string("1"), 0)]
#[case(Value::string("-1"), 1)]
#[case(Value::string("-0.01"), 1)]
#[case(Value::None, 0)]
#[case(Value::string("a"), 0)]
fn test_additional_format_len(#[case] value: Value, #[case] expected: usize) {
    assert_eq!(prop(value).additional_format_len(), expected);
}

// === Summary ===

#[rstest]
#[case(
    Value::Int(0),
    "data=0, typename=INT, align=right, str_len=1, integer_digits=1, decimal_places=0, additional_format_len=0"
)]
#[case(
    Value::Float(-1.0),
    "data=-1.0, typename=FLOAT, align=right, str_len=4, integer_digits=1, decimal_places=1, additional_format_len=1"
)]
#[case(
    Value::Float(-12.234),
    "data=-12.23, typename=FLOAT, align=right, str_len=6, integer_digits=2, decimal_places=2, additional_format_len=1"
)]
#[case(
    Value::string("abcdefg"),
    "data=abcdefg, typename=STRING, align=left, str_len=7, integer_digits=nan, decimal_places=nan, additional_format_len=0"
)]
#[case(
    Value::None,
    "data=None, typename=NONE, align=left, str_len=4, integer_digits=nan, decimal_places=nan, additional_format_len=0"
)]
fn test_summary(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(prop(value).to_string(), expected);
}

#[test]
fn test_serialize() {
    let json = serde_json::to_value(prop(-12.234)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "data": -12.234,
            "typecode": "FLOAT",
            "align": "right",
            "str_len": 6,
            "integer_digits": 2,
            "decimal_places": 2,
            "additional_format_len": 1,
            "format_spec": ".2f",
        })
    );
}

proptest! {
    #[test]
    fn prop_integers(n in any::<i64>()) {
        let dp = prop(n);
        prop_assert_eq!(dp.typecode(), Typecode::Int);
        prop_assert_eq!(dp.align(), Align::Right);
        prop_assert_eq!(dp.integer_digits(), Some(n.unsigned_abs().to_string().len()));
        prop_assert_eq!(dp.decimal_places(), Some(0));
        prop_assert_eq!(dp.str_len(), n.to_string().len());
        prop_assert_eq!(dp.additional_format_len(), usize::from(n < 0));
    }

    #[test]
    fn prop_finite_floats(f in -1e15f64..1e15f64) {
        let dp = prop(f);
        prop_assert_eq!(dp.typecode(), Typecode::Float);
        prop_assert_eq!(dp.align(), Align::Right);
        prop_assert_eq!(dp.additional_format_len(), usize::from(f < 0.0));
        prop_assert!(dp.decimal_places().is_some_and(|places| places <= 6));
    }

    #[test]
    fn prop_none_resolves_to_none_value(text in "[a-z]{0,8}") {
        let config = PropertyConfig::default().with_none_value(text.as_str());
        let dp = DataProperty::new(Value::None, &config).unwrap();
        prop_assert_eq!(dp.typecode(), Typecode::None);
        prop_assert_eq!(dp.data(), &Value::string(text));
    }
}
