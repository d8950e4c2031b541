//! Parameter serialization with RFC 6868 caret encoding.

use crate::rfc::ical::core::Parameter;

/// SAFE-CHAR, or QSAFE-CHAR when `quoted`: whitespace, `!`, printable ASCII
/// other than DQUOTE, and any non-ASCII character. Unquoted text also
/// excludes `,`, `:` and `;`.
fn is_safe_char(c: char, quoted: bool) -> bool {
    match c {
        ' ' | '\t' | '!' => true,
        ',' | ':' | ';' => quoted,
        '#'..='~' => true,
        _ => !c.is_ascii(),
    }
}

/// Encodes one parameter value.
///
/// The value is wrapped in DQUOTE when it is empty or contains `,`, `:` or
/// `;`. Newline, `^` and `"` are caret-encoded; any other character that
/// is not allowed in parameter text becomes a space.
#[must_use]
pub fn encode_param_value(value: &str) -> String {
    let quoted = value.is_empty() || value.contains([',', ':', ';']);
    let mut result = String::with_capacity(value.len() + 2);

    if quoted {
        result.push('"');
    }
    for c in value.chars() {
        match c {
            '\n' => result.push_str("^n"),
            '^' => result.push_str("^^"),
            '"' => result.push_str("^'"),
            c if is_safe_char(c, quoted) => result.push(c),
            _ => result.push(' '),
        }
    }
    if quoted {
        result.push('"');
    }

    result
}

/// Prints `NAME=value[,value...]`.
///
/// Returns `None` for an `X` or IANA parameter without a name and for a
/// parameter without values.
#[must_use]
pub fn print_parameter(param: &Parameter) -> Option<String> {
    if param.name().is_empty() || param.values().is_empty() {
        tracing::debug!(kind = %param.kind(), "Parameter has no name or no value");
        return None;
    }

    let values: Vec<String> = param
        .values()
        .iter()
        .map(|value| encode_param_value(value))
        .collect();
    Some(format!("{}={}", param.name(), values.join(",")))
}
