//! Round-trip parsing and printing tests for lossless value kinds.
//!
//! These tests verify that printing a value, parsing the text back as the
//! same kind and printing again yields the same text.

use proptest::prelude::*;

use crate::rfc::ical::build::{print_parameter, quote};
use crate::rfc::ical::core::{
    Date, DateTime, Geo, Parameter, ParameterKind, Time, UtcOffset, Value, ValueKind,
};
use crate::rfc::ical::parse::{dequote, parse_parameter, parse_value};

/// Print `value`, parse the text back as `kind`, then print again.
fn round_trip(kind: ValueKind, value: &Value) -> Result<(), String> {
    let printed = value
        .as_text()
        .ok_or_else(|| format!("{kind} value printed nothing"))?;
    let reparsed =
        parse_value(kind, &printed).map_err(|e| format!("Reparse failed: {e}\n{printed}"))?;
    let reprinted = reparsed
        .as_text()
        .ok_or_else(|| format!("Reparsed {kind} value printed nothing"))?;

    if printed != reprinted {
        return Err(format!("Text mismatch: {printed:?} vs {reprinted:?}"));
    }
    Ok(())
}

fn date_strategy() -> impl Strategy<Value = Date> {
    (1900_u16..2100, 1_u8..=12, 1_u8..=28).prop_map(|(y, m, d)| Date::new(y, m, d))
}

fn time_strategy() -> impl Strategy<Value = Time> {
    (0_u8..24, 0_u8..60, 0_u8..60, any::<bool>()).prop_map(|(h, m, s, utc)| Time::new(h, m, s, utc))
}

proptest! {
    #[test]
    fn prop_integer(n in any::<i32>()) {
        prop_assert_eq!(round_trip(ValueKind::Integer, &Value::integer(n)), Ok(()));
    }

    #[test]
    fn prop_boolean(b in any::<bool>()) {
        prop_assert_eq!(round_trip(ValueKind::Boolean, &Value::boolean(b)), Ok(()));
    }

    #[test]
    fn prop_utc_offset(seconds in -86_399_i32..=86_399) {
        let value = Value::utc_offset(UtcOffset::from_seconds(seconds));
        prop_assert_eq!(round_trip(ValueKind::UtcOffset, &value), Ok(()));
    }

    #[test]
    fn prop_date(date in date_strategy()) {
        let value = Value::date(date);
        prop_assert_eq!(round_trip(ValueKind::Date, &value), Ok(()));
    }

    #[test]
    fn prop_date_time(date in date_strategy(), time in time_strategy()) {
        let value = Value::date_time(DateTime { date, time: Some(time) });
        prop_assert_eq!(round_trip(ValueKind::DateTime, &value), Ok(()));
    }

    #[test]
    fn prop_geo(lat in -90.0_f64..90.0, lon in -180.0_f64..180.0) {
        let value = Value::geo(Geo::from_f64(lat, lon));
        prop_assert_eq!(round_trip(ValueKind::Geo, &value), Ok(()));
    }

    #[test]
    fn prop_float(f in -1.0e12_f64..1.0e12) {
        prop_assert_eq!(round_trip(ValueKind::Float, &Value::float(f)), Ok(()));
    }

    #[test]
    fn prop_text(s in "[ -~\n\t]{0,64}") {
        prop_assert_eq!(round_trip(ValueKind::Text, &Value::text(s)), Ok(()));
    }

    #[test]
    fn prop_dequote_inverts_quote(s in "[a-z\n\t\\\\,;\"]{0,64}") {
        let quoted = quote(&s, None, ValueKind::Text, usize::MAX);
        prop_assert_eq!(dequote(&quoted), s);
    }

    #[test]
    fn prop_parameter_value_survives_printing(s in "[ -~\n]{0,48}") {
        let printed = print_parameter(&Parameter::with_value(ParameterKind::Cn, s.clone()))
            .ok_or_else(|| TestCaseError::fail("CN printed nothing"))?;
        let reparsed = parse_parameter(&printed)
            .map_err(|e| TestCaseError::fail(format!("{e}: {printed}")))?;
        prop_assert_eq!(reparsed.values(), [s]);
    }

    #[test]
    fn prop_list_parameter_survives_printing(values in prop::collection::vec("[ -~]{0,16}", 1..4)) {
        let mut param = Parameter::new(ParameterKind::Member);
        param.set_values(values.clone());
        let printed = print_parameter(&param)
            .ok_or_else(|| TestCaseError::fail("MEMBER printed nothing"))?;
        let reparsed = parse_parameter(&printed)
            .map_err(|e| TestCaseError::fail(format!("{e}: {printed}")))?;
        prop_assert_eq!(reparsed.values(), values.as_slice());
    }
}

#[test]
fn overflowing_float_stays_finite() {
    for text in ["1e999", "-1e999"] {
        let value = parse_value(ValueKind::Float, text).unwrap();
        let printed = value.as_text().unwrap();
        let reparsed = parse_value(ValueKind::Float, &printed).unwrap();
        assert!(value.as_float().is_some_and(f64::is_finite));
        assert_eq!(reparsed.as_text(), Some(printed));
    }
}

#[test]
fn text_with_newline_prints_escaped() {
    let value = parse_value(ValueKind::Text, "line1\\nline2").unwrap();
    assert_eq!(value.as_str(), Some("line1\nline2"));
    assert_eq!(value.as_text().as_deref(), Some("line1\\nline2"));
}

#[test]
fn date_time_period_round_trips() {
    for text in ["20260123T090000Z", "20260123T090000Z/PT1H", "20260123T090000Z/20260123T100000Z"] {
        let value = parse_value(ValueKind::DateTimePeriod, text).unwrap();
        assert_eq!(value.as_text().as_deref(), Some(text));
    }
}

#[test]
fn recur_round_trips() {
    let text = "FREQ=WEEKLY;COUNT=4;BYDAY=MO,-1FR";
    let value = parse_value(ValueKind::Recur, text).unwrap();
    assert_eq!(value.as_text().as_deref(), Some(text));
}
