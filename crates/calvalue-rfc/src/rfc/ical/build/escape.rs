//! iCalendar text escaping utilities.

use crate::rfc::ical::core::{ParentRef, ValueKind};
use crate::rfc::ical::parse::{ParseError, ParseErrorKind, ParseResult, dequote};

/// Escapes text for iCalendar TEXT values (RFC 5545 §3.3.11).
///
/// Escapes backslash and newline. Semicolon and comma are escaped too,
/// unless `parent` is a property whose value is a separator-delimited list
/// (see [`PropertyKind::keeps_separators`](crate::rfc::ical::core::PropertyKind::keeps_separators)).
/// CR, backspace and form feed are dropped. Input past `max_iterations`
/// characters is dropped.
#[must_use]
pub fn quote(
    s: &str,
    parent: Option<ParentRef>,
    value_kind: ValueKind,
    max_iterations: usize,
) -> String {
    let keep_separators =
        parent.is_some_and(|p| p.property_kind().keeps_separators(value_kind));

    let mut result = String::with_capacity(s.len() + 10);
    for (i, c) in s.chars().enumerate() {
        if i >= max_iterations {
            tracing::warn!(max_iterations, "Text quoting stopped at iteration limit");
            break;
        }
        match c {
            '\\' => result.push_str("\\\\"),
            ',' | ';' if !keep_separators => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push_str("\\n"),
            '\r' | '\u{8}' | '\u{c}' => {}
            _ => result.push(c),
        }
    }
    result
}

/// ## Summary
/// Canonicalizes a raw TEXT literal into a buffer of `max_len` bytes: the
/// literal is unescaped, then escaped again as a parentless TEXT value.
///
/// One byte of the buffer is reserved, so the result must be shorter than
/// `max_len`.
///
/// ## Errors
/// Returns `TooLong` if the canonical text does not fit.
pub fn encode_text(raw: &str, max_len: usize) -> ParseResult<String> {
    let encoded = quote(&dequote(raw), None, ValueKind::Text, usize::MAX);
    if encoded.len() >= max_len {
        return Err(ParseError::new(ParseErrorKind::TooLong, raw).with_context(format!(
            "encoded text needs {} bytes, buffer holds {max_len}",
            encoded.len() + 1
        )));
    }
    Ok(encoded)
}
