//! Tests for property parameters and their effect on value parsing.

use calvalue_test::component::ical::{
    Parameter, ParameterKind, ParseErrorKind, Property, PropertyKind, Value, ValueKind,
    parse_parameter, print_parameter,
};

/// ## Summary
/// A display name with quotes and a newline survives parse, print, parse.
#[test_log::test]
fn caret_encoded_name_round_trips() {
    let param = parse_parameter("CN=\"Doe^, Jane ^'JD^'^nSales\"").unwrap();
    assert_eq!(param.xvalue(), Some("Doe^, Jane \"JD\"\nSales"));

    let printed = print_parameter(&param).unwrap();
    assert_eq!(printed, "CN=\"Doe^^, Jane ^'JD^'^nSales\"");
    assert_eq!(parse_parameter(&printed).unwrap().values(), param.values());
}

/// ## Summary
/// `VALUE=DATE` on DTSTART makes the property parse a DATE.
#[test_log::test]
fn value_parameter_directs_parsing() {
    let mut prop = Property::new(PropertyKind::DtStart);
    prop.set_value_from_text("20260301").unwrap();
    assert_eq!(prop.value().map(Value::kind), Some(ValueKind::DateTime));

    prop.set_parameter(parse_parameter("VALUE=DATE").unwrap());
    assert_eq!(prop.value_kind(), ValueKind::Date);
    let previous = prop.set_value_from_text("20260301").unwrap();
    assert!(previous.is_some_and(|v| v.parent().is_none()));
    assert_eq!(prop.value().map(Value::kind), Some(ValueKind::Date));
    assert_eq!(prop.value_as_text().as_deref(), Some("20260301"));
}

/// ## Summary
/// Extension parameters are matched by name ignoring case, and a
/// replaced parameter comes back detached.
#[test_log::test]
fn extension_parameter_replacement() {
    let mut prop = Property::new(PropertyKind::Attendee);
    assert!(prop.set_parameter(parse_parameter("X-ROOM=\"B;2\"").unwrap()).is_none());
    assert!(prop.set_parameter(Parameter::with_value(ParameterKind::Role, "CHAIR")).is_none());

    let old = prop.set_parameter(parse_parameter("x-room=C3").unwrap()).unwrap();
    assert_eq!(old.xvalue(), Some("B;2"));
    assert!(old.parent().is_none());
    assert_eq!(prop.parameters().len(), 2);

    let printed: Vec<_> = prop.parameters().iter().filter_map(Parameter::as_text).collect();
    assert_eq!(printed, ["ROLE=CHAIR", "x-room=C3"]);
}

/// ## Summary
/// Rejected parameter text reports which half was wrong.
#[test_log::test]
fn rejected_parameter_text() {
    let kind = |text| parse_parameter(text).unwrap_err().kind;
    assert_eq!(kind("ROLE"), ParseErrorKind::InvalidParameterName);
    assert_eq!(kind("ROLE;X=1"), ParseErrorKind::InvalidParameterName);
    assert_eq!(kind("GAP=PT5"), ParseErrorKind::InvalidParameterValue);
    assert_eq!(kind("DELEGATED-TO=\"mailto:a"), ParseErrorKind::InvalidParameterValue);
}
