//! Tests for kind-directed parsing and its diagnostics.

use calvalue_test::component::error::{RfcError, RfcResult};
use calvalue_test::component::ical::{
    ParseErrorKind, PropertyKind, Value, ValueKind, new_from_string,
    new_from_string_with_diagnostic, parse_value, parse_value_named,
};

use super::helpers::*;

/// ## Summary
/// UTC-OFFSET digits are a packed number; a missing seconds field is zero.
#[test_log::test]
fn utc_offset_boundaries() {
    let offset = |text| parse(ValueKind::UtcOffset, text).as_utc_offset().map(|o| o.as_seconds());
    assert_eq!(offset("0500"), Some(18_000));
    assert_eq!(offset("-013000"), Some(-5_400));
    assert_eq!(offset("+0000"), Some(0));
}

/// ## Summary
/// GEO uses `.` as the decimal separator whatever the host locale says.
#[test_log::test]
fn geo_is_locale_independent() {
    let value = parse(ValueKind::Geo, "37.386013;-122.082932");
    let geo = value.as_geo().expect("geo value");
    assert!((geo.lat.as_f64() - 37.386_013).abs() < 1e-9);
    assert!((geo.lon.as_f64() + 122.082_932).abs() < 1e-9);
    assert_eq!(value.as_text().as_deref(), Some("37.386013;-122.082932"));

    let (value, error) = new_from_string_with_diagnostic(ValueKind::Geo, "37,386013;-122,082932");
    assert!(value.is_none());
    assert_eq!(error.map(|e| e.kind), Some(ParseErrorKind::InvalidGeo));
}

/// ## Summary
/// BOOLEAN accepts exactly TRUE and FALSE.
#[test_log::test]
fn boolean_literals() {
    assert_eq!(parse(ValueKind::Boolean, "TRUE").as_boolean(), Some(true));
    assert_eq!(parse(ValueKind::Boolean, "FALSE").as_boolean(), Some(false));

    let (value, error) = new_from_string_with_diagnostic(ValueKind::Boolean, "Yes");
    assert!(value.is_none());
    let error = error.expect("diagnostic for rejected literal");
    assert_eq!(error.to_string(), "Could not parse Yes as a BOOLEAN property");
}

/// ## Summary
/// Every failing kind yields a diagnostic naming the literal.
#[test_log::test]
fn failures_always_carry_a_diagnostic() {
    let cases = [
        (ValueKind::Date, "2026-02-30"),
        (ValueKind::DateTime, "20260101T246000"),
        (ValueKind::Duration, "P1Y"),
        (ValueKind::Period, "20260101T000000Z"),
        (ValueKind::Trigger, "later"),
        (ValueKind::Recur, "COUNT=2"),
        (ValueKind::RequestStatus, "7.7;Unknown"),
    ];
    for (kind, text) in cases {
        let error = parse_value(kind, text).expect_err(text);
        assert!(
            error.to_string().starts_with(&format!("Failed to parse value: '{text}'")),
            "{kind}: {error}"
        );
        assert_eq!(error.value_kind, Some(kind));
        assert!(new_from_string(kind, text).is_none());
    }
}

/// ## Summary
/// Enumerated properties keep unknown tokens as extension text.
#[test_log::test]
fn property_default_kinds_drive_token_parsing() {
    let kind = PropertyKind::Method.default_value_kind();
    let value = parse(kind, "PUBLISH");
    assert!(value.extension().is_none());
    assert_eq!(value.as_text().as_deref(), Some("PUBLISH"));

    let value = parse(kind, "X-CUSTOM-METHOD");
    assert_eq!(value.extension(), Some("X-CUSTOM-METHOD"));
    assert_eq!(value.as_text().as_deref(), Some("X-CUSTOM-METHOD"));
}

/// ## Summary
/// `VALUE=` names select the parser.
#[test_log::test]
fn value_parameter_names() {
    let value = parse_value_named("DATE-TIME", "20260301").expect("date literal");
    assert_eq!(value.kind(), ValueKind::Date);

    let error = parse_value_named("X-UNKNOWN", "whatever").expect_err("unregistered kind");
    assert_eq!(error.kind, ParseErrorKind::UnknownValueKind);
}

/// ## Summary
/// Constructor and parser failures share one error type for `?`.
#[test_log::test]
fn errors_compose_with_question_mark() {
    fn build(kind_name: &str, text: &str) -> RfcResult<Value> {
        Value::new_named(kind_name)?;
        Ok(parse_value_named(kind_name, text)?)
    }

    assert_eq!(
        build("INTEGER", "42").ok().and_then(|v| v.as_integer()),
        Some(42)
    );
    assert!(matches!(build("NOPE", "1"), Err(RfcError::InvalidKind(_))));
    assert!(matches!(
        build("BOOLEAN", "maybe"),
        Err(RfcError::Parse(e)) if e.kind == ParseErrorKind::InvalidBoolean
    ));
}
