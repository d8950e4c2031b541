//! Tests for canonical printing, TEXT quoting and the standalone text
//! utilities.

use calvalue_test::component::config::CodecConfig;
use calvalue_test::component::ical::{
    ParseErrorKind, PropertyKind, Value, ValueKind, decode_text, encode_text,
};

use super::helpers::*;

/// ## Summary
/// A literal newline prints as `\n`.
#[test_log::test]
fn newline_is_escaped() {
    let value = Value::text("first\nsecond");
    assert_eq!(value.as_text().as_deref(), Some("first\\nsecond"));
}

/// ## Summary
/// `;` stays literal under CATEGORIES and is escaped under SUMMARY.
#[test_log::test]
fn separators_depend_on_property() {
    let value = Value::text("a;b,c");
    assert_eq!(print_under(PropertyKind::Categories, &value).as_deref(), Some("a;b,c"));
    assert_eq!(print_under(PropertyKind::Summary, &value).as_deref(), Some("a\\;b\\,c"));
    assert_eq!(print_under(PropertyKind::Resources, &value).as_deref(), Some("a;b,c"));
}

/// ## Summary
/// Extension properties keep separators unless the value is TEXT.
#[test_log::test]
fn extension_property_separators() {
    let x = parse(ValueKind::X, "1;2");
    assert_eq!(print_under(PropertyKind::X, &x).as_deref(), Some("1;2"));

    let text = Value::text("1;2");
    assert_eq!(print_under(PropertyKind::X, &text).as_deref(), Some("1\\;2"));
}

/// ## Summary
/// The quoting ceiling and float precision come from the codec settings.
#[test_log::test]
fn printer_honours_codec_config() {
    let config = CodecConfig {
        quote_max_iterations: 4,
        float_precision: 2,
    };
    assert_eq!(
        Value::text("abcdefgh").as_text_with(&config).as_deref(),
        Some("abcd")
    );
    assert_eq!(Value::float(0.5).as_text_with(&config).as_deref(), Some("0.50"));
    assert_eq!(Value::float(0.5).as_text().as_deref(), Some("0.500000"));
}

/// ## Summary
/// `Display` writes the canonical text, or nothing when there is none.
#[test_log::test]
fn display_of_values() {
    assert_eq!(parse(ValueKind::Duration, "-P2W").to_string(), "-P2W");
    assert_eq!(Value::new(ValueKind::X).expect("registered kind").to_string(), "");
    assert_eq!(parse(ValueKind::RequestStatus, "2.0").to_string(), "2.0;Success.");
}

/// ## Summary
/// `encode_text` canonicalizes raw TEXT within a byte budget.
#[test_log::test]
fn encode_text_budget() {
    assert_eq!(
        encode_text("Lunch, then\\nnap", 64).expect("fits"),
        "Lunch\\, then\\nnap"
    );
    let error = encode_text("a;b", 4).expect_err("needs five bytes");
    assert_eq!(error.kind, ParseErrorKind::TooLong);
}

/// ## Summary
/// `decode_text` only strips backslashes.
#[test_log::test]
fn decode_text_is_literal() {
    assert_eq!(decode_text("one\\,two\\nthree", 64).expect("fits"), "one,twonthree");
    assert_eq!(decode_text("tail\\", 64).expect("fits"), "tail");
    let error = decode_text("abcdef", 6).expect_err("no room for terminator");
    assert_eq!(error.kind, ParseErrorKind::TooLong);
}
