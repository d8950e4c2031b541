//! Canonical text for a single value.

use calvalue_core::config::CodecConfig;

use super::escape::quote;
use crate::rfc::ical::core::{PropertyToken, Value, ValueData};
use crate::rfc::ical::parse::format_f64;

/// Prints `value` with the default [`CodecConfig`].
#[must_use]
pub fn print(value: &Value) -> Option<String> {
    print_with(value, &CodecConfig::default())
}

/// Prints the canonical text of `value`.
///
/// TEXT, UID and X text is escaped, with `;` and `,` left alone when the
/// owning property is a list (CATEGORIES, RESOURCES and similar). Returns
/// `None` for a freed value and for an X value without text.
#[must_use]
pub fn print_with(value: &Value, config: &CodecConfig) -> Option<String> {
    let quoted = |s: &str| quote(s, value.parent(), value.kind(), config.quote_max_iterations);

    let text = match value.data() {
        ValueData::Text(s) | ValueData::Uid(s) => quoted(s),
        ValueData::String(s)
        | ValueData::Uri(s)
        | ValueData::CalAddress(s)
        | ValueData::Query(s)
        | ValueData::XmlReference(s) => s.clone(),
        ValueData::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        ValueData::Integer(n) => n.to_string(),
        ValueData::Float(f) => format_f64(*f, config.float_precision),
        ValueData::UtcOffset(offset) => offset.to_string(),
        ValueData::Geo(geo) => geo.to_string(),
        ValueData::Date(dt) | ValueData::DateTime(dt) => dt.to_string(),
        ValueData::DateTimePeriod(dtp) => dtp.to_string(),
        ValueData::Duration(dur) => dur.to_string(),
        ValueData::Period(period) => period.to_string(),
        ValueData::Trigger(trigger) => trigger.to_string(),
        ValueData::Recur(rule) => rule.to_string(),
        ValueData::RequestStatus(status) => status.to_string(),
        ValueData::Attach(attachment) | ValueData::Binary(attachment) => {
            match (attachment.url(), attachment.data()) {
                (Some(url), _) => url.to_string(),
                (None, Some(data)) => String::from_utf8_lossy(data).into_owned(),
                (None, None) => String::new(),
            }
        }
        ValueData::Action(t) => token_text(value, *t),
        ValueData::BusyType(t) => token_text(value, *t),
        ValueData::CarLevel(t) => token_text(value, *t),
        ValueData::Class(t) => token_text(value, *t),
        ValueData::Cmd(t) => token_text(value, *t),
        ValueData::Method(t) => token_text(value, *t),
        ValueData::PollCompletion(t) => token_text(value, *t),
        ValueData::PollMode(t) => token_text(value, *t),
        ValueData::ParticipantType(t) => token_text(value, *t),
        ValueData::Proximity(t) => token_text(value, *t),
        ValueData::QueryLevel(t) => token_text(value, *t),
        ValueData::ResourceType(t) => token_text(value, *t),
        ValueData::Status(t) => token_text(value, *t),
        ValueData::Transp(t) => token_text(value, *t),
        ValueData::X => quoted(value.extension()?),
        ValueData::NoValue => {
            tracing::debug!("Printing a freed value");
            return None;
        }
    };
    Some(text)
}

/// Extension text wins over the token spelling.
fn token_text<T: PropertyToken>(value: &Value, token: T) -> String {
    value
        .extension()
        .map_or_else(|| token.as_str().to_string(), str::to_string)
}
