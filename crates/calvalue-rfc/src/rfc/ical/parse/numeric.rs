//! Numeral scanning for FLOAT, INTEGER, UTC-OFFSET and GEO.
//!
//! Everything here reads `.` as the decimal separator and never consults
//! process state, so results do not depend on the host locale.

use super::error::{ParseError, ParseErrorKind, ParseResult};

fn skip_space(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

fn is_numeral_char(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '.')
}

/// A numeral taken from the front of a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral<'a> {
    /// The copied numeral, truncated to the requested length.
    pub text: String,
    /// Input left after the whole numeral run, truncated part included.
    pub rest: &'a str,
}

/// ## Summary
/// Skips leading whitespace and copies the longest run of `[0-9+.-]`,
/// truncated to `max_len` characters.
///
/// ## Errors
/// Returns `InvalidNumber` if the copied text does not start with a
/// decimal number.
pub fn float_prefix(input: &str, max_len: usize) -> ParseResult<Numeral<'_>> {
    let start = skip_space(input);
    let end = start.find(|c| !is_numeral_char(c)).unwrap_or(start.len());
    let (run, rest) = start.split_at(end);
    let text: String = run.chars().take(max_len).collect();

    if leading_f64(&text).is_none() {
        return Err(ParseError::new(ParseErrorKind::InvalidNumber, input)
            .with_context("expected a decimal number"));
    }
    Ok(Numeral { text, rest })
}

/// Value of the longest prefix of `input` (after whitespace) that reads as
/// a finite decimal number, exponent allowed. An exponent that overflows
/// is dropped, so `1e999` reads as `1e99`.
#[must_use]
pub fn leading_f64(input: &str) -> Option<f64> {
    let s = skip_space(input);
    let end = s
        .find(|c: char| !(is_numeral_char(c) || matches!(c, 'e' | 'E')))
        .unwrap_or(s.len());
    (1..=end)
        .rev()
        .find_map(|n| s[..n].parse::<f64>().ok().filter(|v| v.is_finite()))
}

/// Permissive float read: the leading number, or `0.0` if there is none.
#[must_use]
pub fn lenient_f64(input: &str) -> f64 {
    leading_f64(input).unwrap_or(0.0)
}

/// Permissive integer read: optional sign and leading digits, `0` if there
/// are none. Saturates instead of overflowing.
#[must_use]
pub fn lenient_i64(input: &str) -> i64 {
    let s = skip_space(input);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}

/// [`lenient_i64`] clamped to the `i32` range.
#[must_use]
pub fn lenient_i32(input: &str) -> i32 {
    saturate_i32(lenient_i64(input))
}

/// Clamps to the `i32` range.
#[must_use]
pub fn saturate_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Fixed-point rendering with `.` as the separator.
#[must_use]
pub fn format_f64(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_prefix_returns_rest() {
        let numeral = float_prefix("  37.386013 ;-122.08", 15).unwrap();
        assert_eq!(numeral.text, "37.386013");
        assert_eq!(numeral.rest, " ;-122.08");
    }

    #[test]
    fn float_prefix_truncates_but_consumes_run() {
        let numeral = float_prefix("1.23456789012345678;2", 15).unwrap();
        assert_eq!(numeral.text, "1.2345678901234");
        assert_eq!(numeral.rest, ";2");
    }

    #[test]
    fn float_prefix_rejects_non_numbers() {
        assert!(float_prefix("abc", 15).is_err());
        assert!(float_prefix("", 15).is_err());
        assert!(float_prefix("+-", 15).is_err());
    }

    #[test]
    fn leading_f64_takes_longest_prefix() {
        assert_eq!(leading_f64("1.5.3"), Some(1.5));
        assert_eq!(leading_f64("2e3x"), Some(2000.0));
        assert_eq!(leading_f64("-0.25"), Some(-0.25));
        assert_eq!(leading_f64("x1"), None);
    }

    #[test]
    fn leading_f64_never_overflows() {
        assert_eq!(leading_f64("1e999"), Some(1e99));
        assert_eq!(leading_f64("-1e999"), Some(-1e99));
        assert_eq!(leading_f64("9e99999"), Some(9e99));
        assert!(float_prefix("1e999", 15).is_ok());
    }

    #[test]
    fn lenient_integers() {
        assert_eq!(lenient_i32("42"), 42);
        assert_eq!(lenient_i32("  -7abc"), -7);
        assert_eq!(lenient_i32("abc"), 0);
        assert_eq!(lenient_i32("99999999999"), i32::MAX);
        assert_eq!(lenient_i64("+0530"), 530);
    }

    #[test]
    fn format_is_locale_free() {
        assert_eq!(format_f64(3.5, 6), "3.500000");
        assert_eq!(format_f64(-2.71828, 2), "-2.72");
    }
}
