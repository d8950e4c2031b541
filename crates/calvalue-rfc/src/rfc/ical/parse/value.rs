//! Kind-directed value parsing.
//!
//! Maps a literal to a [`Value`] of a caller-chosen [`ValueKind`]. The
//! literal is never guessed at: the same text parses differently for
//! different kinds.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::escape::dequote;
use super::numeric::{lenient_f64, lenient_i32};
use super::values::{
    parse_boolean, parse_date_time_period, parse_datetime, parse_duration, parse_geo,
    parse_period, parse_request_status, parse_rrule, parse_trigger, parse_utc_offset,
};
use crate::rfc::ical::core::{
    Action, Attachment, BusyType, CarLevel, Class, Cmd, Method, ParticipantType, PollCompletion,
    PollMode, PropertyToken, Proximity, QueryLevel, ResourceType, Status, Transp, Value,
    ValueKind,
};

/// ## Summary
/// Parses `text` as a value of `kind`.
///
/// TEXT, UID and X literals are unescaped. INTEGER, FLOAT and UTC-OFFSET
/// are read permissively and never fail. Unrecognised tokens of an
/// enumerated kind are kept as the extension member with the literal.
///
/// ## Errors
/// Returns an error if the literal is malformed for `kind`, or if `kind` is
/// the `NoValue` sentinel.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn parse_value(kind: ValueKind, text: &str) -> ParseResult<Value> {
    let value = match kind {
        ValueKind::Boolean => Value::boolean(parse_boolean(text)?),
        ValueKind::Integer => Value::integer(lenient_i32(text)),
        ValueKind::Float => Value::float(lenient_f64(text)),
        ValueKind::UtcOffset => Value::utc_offset(parse_utc_offset(text)),
        ValueKind::Text => Value::text(dequote(text)),
        ValueKind::Uid => Value::uid(dequote(text)),
        ValueKind::X => Value::x(dequote(text)),
        ValueKind::String => Value::string(text),
        ValueKind::Uri => Value::uri(text),
        ValueKind::CalAddress => Value::cal_address(text),
        ValueKind::Query => Value::query(text),
        ValueKind::XmlReference => Value::xml_reference(text),
        ValueKind::Geo => Value::geo(parse_geo(text)?),
        ValueKind::Date | ValueKind::DateTime => {
            Value::date_time(parse_datetime(text).map_err(|e| generic(kind, text, &e))?)
        }
        ValueKind::DateTimePeriod => Value::date_time_period(
            parse_date_time_period(text).map_err(|e| generic(kind, text, &e))?,
        ),
        ValueKind::Duration => {
            Value::duration(parse_duration(text).map_err(|e| generic(kind, text, &e))?)
        }
        ValueKind::Period => Value::period(parse_period(text).map_err(|e| generic(kind, text, &e))?),
        ValueKind::Trigger => {
            Value::trigger(parse_trigger(text).map_err(|e| generic(kind, text, &e))?)
        }
        ValueKind::Recur => Value::recur(parse_rrule(text).map_err(|e| generic(kind, text, &e))?),
        ValueKind::RequestStatus => Value::request_status(
            parse_request_status(text).map_err(|e| generic(kind, text, &e))?,
        ),
        ValueKind::Attach => Value::attach(Attachment::from_url(text)),
        ValueKind::Binary => Value::binary(Attachment::from_data(text.as_bytes())),
        ValueKind::Action => parse_token::<Action>(text),
        ValueKind::BusyType => parse_token::<BusyType>(text),
        ValueKind::CarLevel => parse_token::<CarLevel>(text),
        ValueKind::Class => parse_token::<Class>(text),
        ValueKind::Cmd => parse_token::<Cmd>(text),
        ValueKind::Method => parse_token::<Method>(text),
        ValueKind::PollCompletion => parse_token::<PollCompletion>(text),
        ValueKind::PollMode => parse_token::<PollMode>(text),
        ValueKind::ParticipantType => parse_token::<ParticipantType>(text),
        ValueKind::Proximity => parse_token::<Proximity>(text),
        ValueKind::QueryLevel => parse_token::<QueryLevel>(text),
        ValueKind::ResourceType => parse_token::<ResourceType>(text),
        ValueKind::Status => parse_token::<Status>(text),
        ValueKind::Transp => parse_token::<Transp>(text),
        ValueKind::NoValue => {
            tracing::warn!(%kind, "No parser for value kind");
            return Err(ParseError::new(ParseErrorKind::UnknownValueKind, text));
        }
    };

    tracing::trace!(%kind, "Parsed value");
    Ok(value)
}

/// ## Summary
/// Parses `text` as a value of the kind named `kind_name` (as in a
/// `VALUE=` parameter).
///
/// ## Errors
/// Returns `UnknownValueKind` if the name is not registered, otherwise
/// whatever [`parse_value`] returns.
pub fn parse_value_named(kind_name: &str, text: &str) -> ParseResult<Value> {
    let kind = ValueKind::from_name(kind_name).ok_or_else(|| {
        ParseError::new(ParseErrorKind::UnknownValueKind, text)
            .with_context(format!("no value kind named {kind_name}"))
    })?;
    parse_value(kind, text)
}

/// Like [`parse_value`], reporting failure as `None` after logging the
/// diagnostic.
#[must_use]
pub fn new_from_string(kind: ValueKind, text: &str) -> Option<Value> {
    parse_value(kind, text)
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected value literal"))
        .ok()
}

/// Like [`parse_value`], split into the value and the diagnostic. Exactly
/// one of the two is present.
#[must_use]
pub fn new_from_string_with_diagnostic(
    kind: ValueKind,
    text: &str,
) -> (Option<Value>, Option<ParseError>) {
    match parse_value(kind, text) {
        Ok(value) => (Some(value), None),
        Err(error) => (None, Some(error)),
    }
}

/// Looks up an enumerated token. Literals that are not tokens of `T`'s
/// property are kept verbatim on the extension member.
#[must_use]
pub fn parse_token<T: PropertyToken>(text: &str) -> Value {
    match T::from_token(text) {
        Some(token) if token.belongs_to(T::PROPERTY) => Value::token(token),
        _ => {
            tracing::debug!(kind = %T::VALUE_KIND, literal = text, "Keeping extension token");
            Value::token_extension::<T>(text)
        }
    }
}

/// Replaces a sub-parser failure with the generic diagnostic, keeping the
/// detail as context.
fn generic(kind: ValueKind, text: &str, cause: &ParseError) -> ParseError {
    let detail = match &cause.context {
        Some(ctx) => format!("{}: {ctx}", cause.kind),
        None => cause.kind.to_string(),
    };
    ParseError::new(ParseErrorKind::InvalidValue, text)
        .with_value_kind(kind)
        .with_context(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::{DateTime, Duration, Frequency, StatusCode, ValueData};

    #[test_log::test]
    fn parses_scalars() {
        assert_eq!(parse_value(ValueKind::Integer, "42").unwrap().as_integer(), Some(42));
        assert_eq!(parse_value(ValueKind::Integer, "junk").unwrap().as_integer(), Some(0));
        assert_eq!(parse_value(ValueKind::Float, "2.5").unwrap().as_float(), Some(2.5));
        assert_eq!(parse_value(ValueKind::Boolean, "TRUE").unwrap().as_boolean(), Some(true));
        assert_eq!(
            parse_value(ValueKind::UtcOffset, "-0500")
                .unwrap()
                .as_utc_offset()
                .map(|o| o.as_seconds()),
            Some(-18_000)
        );
    }

    #[test_log::test]
    fn text_is_unescaped_but_uri_is_not() {
        let text = parse_value(ValueKind::Text, "a\\, b\\nc").unwrap();
        assert_eq!(text.as_str(), Some("a, b\nc"));
        let uri = parse_value(ValueKind::Uri, "http://x/a\\,b").unwrap();
        assert_eq!(uri.as_str(), Some("http://x/a\\,b"));
    }

    #[test_log::test]
    fn date_literal_narrows_kind() {
        let date = parse_value(ValueKind::DateTime, "20260123").unwrap();
        assert_eq!(date.kind(), ValueKind::Date);
        let dt = parse_value(ValueKind::Date, "20260123T101500Z").unwrap();
        assert_eq!(dt.kind(), ValueKind::DateTime);
        assert_eq!(dt.as_date_time(), Some(DateTime::utc(2026, 1, 23, 10, 15, 0)));
    }

    #[test_log::test]
    fn structured_kinds() {
        let dur = parse_value(ValueKind::Duration, "PT1H").unwrap();
        assert_eq!(dur.as_duration(), Some(Duration::hours(1)));
        let rule = parse_value(ValueKind::Recur, "FREQ=YEARLY").unwrap();
        assert_eq!(rule.as_recur().and_then(|r| r.freq), Some(Frequency::Yearly));
        let status = parse_value(ValueKind::RequestStatus, "2.0;Success").unwrap();
        assert_eq!(status.as_request_status().map(|s| s.code), Some(StatusCode::SUCCESS));
    }

    #[test_log::test]
    fn known_token() {
        let value = parse_value(ValueKind::Status, "confirmed").unwrap();
        assert_eq!(value.as_token::<Status>(), Some(Status::Confirmed));
        assert!(value.extension().is_none());
    }

    #[test_log::test]
    fn unknown_token_becomes_extension() {
        let value = parse_value(ValueKind::Method, "X-SPECIAL").unwrap();
        assert_eq!(value.as_token::<Method>(), Some(Method::X));
        assert_eq!(value.extension(), Some("X-SPECIAL"));
        assert_eq!(value.as_text().as_deref(), Some("X-SPECIAL"));
    }

    #[test_log::test]
    fn spelled_out_placeholder_tokens_are_extensions() {
        let value = parse_value(ValueKind::Class, "NONE").unwrap();
        assert_eq!(value.as_token::<Class>(), Some(Class::X));
        assert_eq!(value.extension(), Some("NONE"));
    }

    #[test_log::test]
    fn x_kind_keeps_unescaped_literal() {
        let value = parse_value(ValueKind::X, "a\\;b").unwrap();
        assert!(matches!(value.data(), ValueData::X));
        assert_eq!(value.extension(), Some("a;b"));
    }

    #[test_log::test]
    fn binary_keeps_bytes() {
        let value = parse_value(ValueKind::Binary, "aGVsbG8=").unwrap();
        let attachment = value.as_attachment().unwrap();
        assert_eq!(attachment.decode_base64().unwrap(), b"hello");
    }

    #[test_log::test]
    fn failures_carry_diagnostics() {
        let err = parse_value(ValueKind::Boolean, "maybe").unwrap_err();
        assert_eq!(err.to_string(), "Could not parse maybe as a BOOLEAN property");

        let err = parse_value(ValueKind::Geo, "1.0").unwrap_err();
        assert_eq!(err.to_string(), "Could not parse 1.0 as a GEO property");

        let err = parse_value(ValueKind::Duration, "P1X").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse value: 'P1X'"));
        assert_eq!(err.value_kind, Some(ValueKind::Duration));

        let err = parse_value(ValueKind::NoValue, "abc").unwrap_err();
        assert_eq!(err.to_string(), "Unknown type for 'abc'");
    }

    #[test_log::test]
    fn named_kinds() {
        let value = parse_value_named("cal-address", "mailto:a@example.com").unwrap();
        assert_eq!(value.kind(), ValueKind::CalAddress);
        let err = parse_value_named("NOT-A-KIND", "x").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnknownValueKind);
    }

    #[test_log::test]
    fn diagnostic_names_the_literal() {
        let (value, error) = new_from_string_with_diagnostic(ValueKind::Boolean, "NO");
        assert!(value.is_none());
        let error = error.unwrap();
        assert_eq!(error.error_type().as_str(), "VALUE-PARSE-ERROR");
        assert_eq!(error.to_string(), "Could not parse NO as a BOOLEAN property");

        let (value, error) = new_from_string_with_diagnostic(ValueKind::Boolean, "TRUE");
        assert!(value.is_some() && error.is_none());
    }

    #[test_log::test]
    fn new_from_string_swallows_errors() {
        assert!(new_from_string(ValueKind::Period, "nope").is_none());
        assert!(new_from_string(ValueKind::Period, "20260101T000000Z/PT1H").is_some());
    }
}
