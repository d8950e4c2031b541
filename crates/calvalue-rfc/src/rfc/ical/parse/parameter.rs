//! Parameter parsing (RFC 5545 §3.2) with RFC 6868 caret decoding.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::values::parse_duration;
use crate::rfc::ical::core::{Parameter, ParameterKind};

/// Reverses RFC 6868 caret encoding: `^n` is a newline, `^^` a caret and
/// `^'` a double quote. Any other caret is kept as-is.
#[must_use]
pub fn decode_param_value(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '^' {
            let decoded = match chars.peek() {
                Some('n') => Some('\n'),
                Some('^') => Some('^'),
                Some('\'') => Some('"'),
                _ => None,
            };
            if let Some(decoded) = decoded {
                chars.next();
                result.push(decoded);
                continue;
            }
        }
        result.push(c);
    }

    result
}

/// Splits on commas outside DQUOTE pairs; `None` if a quote is left open.
fn split_list(raw: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in raw.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if in_quotes {
        return None;
    }
    parts.push(&raw[start..]);
    Some(parts)
}

/// Strips one enclosing DQUOTE pair. A quote anywhere else is an error.
fn unquote(part: &str) -> Option<&str> {
    match part.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"').filter(|inner| !inner.contains('"')),
        None => (!part.contains('"')).then_some(part),
    }
}

/// ## Summary
/// Parses `NAME=value` parameter text.
///
/// The name is split at the first `=`. List parameters (MEMBER,
/// DELEGATED-TO, ...) are split on commas outside quotes; every value is
/// unquoted and caret-decoded. A GAP value must be a duration and is kept
/// in canonical form.
///
/// ## Errors
/// Returns `InvalidParameterName` if there is no `=` or the name is empty
/// or malformed, and `InvalidParameterValue` for stray or unterminated
/// quotes and for a GAP that is not a duration.
pub fn parse_parameter(text: &str) -> ParseResult<Parameter> {
    let name_error = |context: &str| {
        ParseError::new(ParseErrorKind::InvalidParameterName, text).with_context(context)
    };
    let value_error = |context: &str| {
        ParseError::new(ParseErrorKind::InvalidParameterValue, text).with_context(context)
    };

    let (name, raw) = text.split_once('=').ok_or_else(|| name_error("missing '='"))?;
    let kind = ParameterKind::from_name(name)
        .ok_or_else(|| name_error("expected letters, digits and '-'"))?;

    let parts = if kind.is_multivalued() {
        split_list(raw).ok_or_else(|| value_error("unterminated quoted value"))?
    } else {
        vec![raw]
    };
    let values = parts
        .into_iter()
        .map(|part| {
            unquote(part)
                .map(decode_param_value)
                .ok_or_else(|| value_error("misplaced '\"'"))
        })
        .collect::<ParseResult<Vec<_>>>()?;

    let mut param = Parameter::new(kind);
    if kind.is_named() {
        param.set_xname(name);
    }

    if kind == ParameterKind::Gap {
        let literal = values.first().map_or("", String::as_str);
        let gap = parse_duration(literal)
            .map_err(|e| value_error(&format!("GAP must be a duration ({})", e.kind)))?;
        param.set_xvalue(gap.to_string());
    } else {
        param.set_values(values);
    }

    tracing::trace!(parameter = %param.name(), count = param.values().len(), "Parsed parameter");
    Ok(param)
}
