//! Reversing TEXT escapes (RFC 5545 §3.3.11).

use super::error::{ParseError, ParseErrorKind, ParseResult};

/// Removes TEXT escapes in one left-to-right pass.
///
/// `\n`, `\t`, `\r`, `\b` and `\f` (either case) become the control
/// character; `\;`, `\,`, `\"` and `\\` become the escaped character; any
/// other escaped character becomes a space. A backslash at the very end
/// stops the scan.
#[must_use]
pub fn dequote(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some('t' | 'T') => result.push('\t'),
            Some('r' | 'R') => result.push('\r'),
            Some('b' | 'B') => result.push('\u{8}'),
            Some('f' | 'F') => result.push('\u{c}'),
            Some(escaped @ (';' | ',' | '"' | '\\')) => result.push(escaped),
            Some(_) => result.push(' '),
            None => break,
        }
    }

    result
}

/// ## Summary
/// Generic unescape into a buffer of `max_len` bytes: every backslash is
/// dropped and the character after it kept as-is.
///
/// One byte of the buffer is reserved, so the decoded text must be shorter
/// than `max_len`.
///
/// ## Errors
/// Returns `TooLong` if the decoded text does not fit.
pub fn decode_text(quoted: &str, max_len: usize) -> ParseResult<String> {
    let mut result = String::with_capacity(quoted.len().min(max_len));
    let mut chars = quoted.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => result.push(escaped),
                None => break,
            }
        } else {
            result.push(c);
        }
        if result.len() > max_len {
            break;
        }
    }

    if result.len() >= max_len {
        return Err(ParseError::new(ParseErrorKind::TooLong, quoted)
            .with_context(format!("decoded text needs more than {max_len} bytes")));
    }
    Ok(result)
}
