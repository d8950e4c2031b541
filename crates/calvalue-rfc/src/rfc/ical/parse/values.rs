//! Value type parsers for iCalendar (RFC 5545 §3.3).
//!
//! Each parser takes the whole literal and reports it back in the error.
#![expect(
    clippy::map_err_ignore,
    reason = "Number parse errors carry no detail beyond the literal already kept in ParseError"
)]

use std::ops::Range;
use std::str::FromStr;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::numeric::{float_prefix, lenient_i64, saturate_i32};
use crate::rfc::ical::core::{
    Date, DateTime, DateTimePeriod, Duration, Frequency, GEO_COORD_MAX_LEN, Geo, GeoCoord, Period,
    RRule, RequestStatus, StatusCode, Time, Trigger, UtcOffset, ValueKind, Weekday, WeekdayNum,
};

/// Digits at `range`, rejecting signs and anything non-ASCII.
fn fixed_digits<T: FromStr>(s: &str, range: Range<usize>) -> Option<T> {
    let part = s.get(range)?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Drops the separators of an extended-format field (`2026-01-23`,
/// `13:30:00`) when they sit exactly at `positions`.
fn compact(s: &str, sep: u8, positions: &[usize], extended_len: usize) -> String {
    let bytes = s.as_bytes();
    let extended = bytes.len() >= extended_len && positions.iter().all(|&p| bytes[p] == sep);
    if extended {
        s.chars().filter(|&c| c != char::from(sep)).collect()
    } else {
        s.to_string()
    }
}

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714"), or the extended YYYY-MM-DD.
///
/// ## Errors
/// Returns an error if the string is not a date that exists.
pub fn parse_date(s: &str) -> ParseResult<Date> {
    let bad = || ParseError::new(ParseErrorKind::InvalidDate, s).with_value_kind(ValueKind::Date);
    let compacted = compact(s, b'-', &[4, 7], 10);
    if compacted.len() != 8 {
        return Err(bad());
    }

    let year = fixed_digits(&compacted, 0..4).ok_or_else(bad)?;
    let month = fixed_digits(&compacted, 4..6).ok_or_else(bad)?;
    let day = fixed_digits(&compacted, 6..8).ok_or_else(bad)?;

    let date = Date { year, month, day };
    if !date.is_valid() {
        return Err(bad().with_context("no such calendar day"));
    }
    Ok(date)
}

/// Parses a TIME value (RFC 5545 §3.3.12).
///
/// Format: HHMMSS[Z] (e.g., "133000", "133000Z"), or the extended HH:MM:SS[Z].
///
/// ## Errors
/// Returns an error if the string is not a valid time of day.
pub fn parse_time(s: &str) -> ParseResult<Time> {
    let bad = || ParseError::new(ParseErrorKind::InvalidTime, s);
    let (time_str, is_utc) = if let Some(stripped) = s.strip_suffix('Z') {
        (stripped, true)
    } else {
        (s, false)
    };

    let compacted = compact(time_str, b':', &[2, 5], 8);
    if compacted.len() != 6 {
        return Err(bad());
    }

    let hour = fixed_digits(&compacted, 0..2).ok_or_else(bad)?;
    let minute = fixed_digits(&compacted, 2..4).ok_or_else(bad)?;
    let second = fixed_digits(&compacted, 4..6).ok_or_else(bad)?;

    // Allow 60 for leap seconds
    if hour > 23 || minute > 59 || second > 60 {
        return Err(bad());
    }

    Ok(Time {
        hour,
        minute,
        second,
        is_utc,
    })
}

/// Parses a DATE or DATE-TIME value (RFC 5545 §3.3.4, §3.3.5).
///
/// Format: YYYYMMDD["T"HHMMSS[Z]], basic or extended. The result has no
/// time of day when the input is a bare date.
///
/// ## Errors
/// Returns an error if either part is malformed.
pub fn parse_datetime(s: &str) -> ParseResult<DateTime> {
    let wrap = |e: ParseError| {
        ParseError::new(ParseErrorKind::InvalidDateTime, s)
            .with_value_kind(ValueKind::DateTime)
            .with_context(e.kind.to_string())
    };

    match s.split_once('T') {
        Some((date_str, time_str)) => {
            let date = parse_date(date_str).map_err(wrap)?;
            let time = parse_time(time_str).map_err(wrap)?;
            Ok(DateTime {
                date,
                time: Some(time),
            })
        }
        None => parse_date(s).map(DateTime::from),
    }
}

/// Parses a UTC-OFFSET value (RFC 5545 §3.3.14).
///
/// The literal is read as one signed packed number, `HHMM` or `HHMMSS`.
/// Literals shorter than seven characters get an implicit `00` seconds
/// field. Never fails; unreadable input is a zero offset.
#[must_use]
pub fn parse_utc_offset(s: &str) -> UtcOffset {
    let mut packed = lenient_i64(s);
    if s.len() < 7 {
        packed = packed.saturating_mul(100);
    }

    let hours = packed / 10_000;
    let minutes = (packed - hours * 10_000) / 100;
    let seconds = packed - hours * 10_000 - minutes * 100;

    let total = hours
        .saturating_mul(3600)
        .saturating_add(minutes * 60)
        .saturating_add(seconds);
    UtcOffset::from_seconds(saturate_i32(total))
}

/// Parses a DURATION value (RFC 5545 §3.3.6).
///
/// Format: [+|-]P[nW] or [+|-]P[nD][T[nH][nM][nS]]
///
/// ## Errors
/// Returns an error if the string is not a valid duration format.
pub fn parse_duration(s: &str) -> ParseResult<Duration> {
    let bad = || ParseError::new(ParseErrorKind::InvalidDuration, s);

    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let rest = rest.strip_prefix('P').ok_or_else(bad)?;

    let mut dur = Duration {
        negative,
        ..Duration::zero()
    };
    let mut in_time = false;
    let mut number: Option<u32> = None;
    let mut saw_weeks = false;
    let mut saw_other = false;
    let mut saw_time = false;

    for c in rest.chars() {
        if let Some(digit) = c.to_digit(10) {
            let next = number
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit))
                .ok_or_else(bad)?;
            number = Some(next);
            continue;
        }

        if c == 'T' && !in_time && number.is_none() {
            in_time = true;
            continue;
        }

        let n = number.take().ok_or_else(bad)?;
        match c {
            'W' if !in_time => {
                dur.weeks = n;
                saw_weeks = true;
            }
            'D' if !in_time => dur.days = n,
            'H' if in_time => dur.hours = n,
            'M' if in_time => dur.minutes = n,
            'S' if in_time => dur.seconds = n,
            _ => return Err(bad()),
        }
        saw_other |= c != 'W';
        saw_time |= in_time;
    }

    // Dangling number or `T`, nothing at all, or weeks mixed with other units
    if number.is_some()
        || (in_time && !saw_time)
        || !(saw_weeks || saw_other)
        || (saw_weeks && saw_other)
    {
        return Err(bad());
    }
    Ok(dur)
}

/// Parses a PERIOD value (RFC 5545 §3.3.9).
///
/// Format: start"/"end or start"/"duration
///
/// ## Errors
/// Returns an error if the string is not a valid period format.
pub fn parse_period(s: &str) -> ParseResult<Period> {
    let bad = |context: String| {
        ParseError::new(ParseErrorKind::InvalidPeriod, s)
            .with_value_kind(ValueKind::Period)
            .with_context(context)
    };

    let (start_str, end_str) = s
        .split_once('/')
        .ok_or_else(|| bad("missing '/' separator".to_string()))?;

    let start = parse_datetime(start_str).map_err(|e| bad(e.kind.to_string()))?;

    if end_str.starts_with('P') || end_str.starts_with('+') || end_str.starts_with('-') {
        let duration = parse_duration(end_str).map_err(|e| bad(e.kind.to_string()))?;
        Ok(Period::Duration { start, duration })
    } else {
        let end = parse_datetime(end_str).map_err(|e| bad(e.kind.to_string()))?;
        Ok(Period::Explicit { start, end })
    }
}

/// Parses a date-time-or-period (RDATE). The date-time form is tried first.
///
/// ## Errors
/// Returns an error if the text is neither.
pub fn parse_date_time_period(s: &str) -> ParseResult<DateTimePeriod> {
    if let Ok(dt) = parse_datetime(s) {
        return Ok(DateTimePeriod::DateTime(dt));
    }
    parse_period(s)
        .map(DateTimePeriod::Period)
        .map_err(|e| e.with_value_kind(ValueKind::DateTimePeriod))
}

/// Parses a TRIGGER value (RFC 5545 §3.8.6.3): a signed duration relative to
/// the alarm anchor, or an absolute date-time.
///
/// ## Errors
/// Returns an error if the text is neither.
pub fn parse_trigger(s: &str) -> ParseResult<Trigger> {
    let relative = s.starts_with('P') || s.starts_with("+P") || s.starts_with("-P");
    let parsed = if relative {
        parse_duration(s).map(Trigger::Relative)
    } else {
        parse_datetime(s).map(Trigger::Absolute)
    };
    parsed.map_err(|e| {
        ParseError::new(ParseErrorKind::InvalidTrigger, s)
            .with_value_kind(ValueKind::Trigger)
            .with_context(e.kind.to_string())
    })
}

/// Parses a RECUR (RRULE) value (RFC 5545 §3.3.10).
///
/// ## Errors
/// Returns an error if the string is not a valid recurrence rule, including
/// one without FREQ.
pub fn parse_rrule(s: &str) -> ParseResult<RRule> {
    let mut rrule = RRule::default();

    for part in s.split(';').filter(|part| !part.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidRRule, s))?;

        parse_rrule_part(&mut rrule, key, value, s)?;
    }

    if rrule.freq.is_none() {
        return Err(ParseError::new(ParseErrorKind::InvalidRRule, s)
            .with_value_kind(ValueKind::Recur)
            .with_context("FREQ is required"));
    }
    Ok(rrule)
}

/// Parses a single RRULE key-value pair.
fn parse_rrule_part(rrule: &mut RRule, key: &str, value: &str, s: &str) -> ParseResult<()> {
    let bad = |kind| ParseError::new(kind, s).with_value_kind(ValueKind::Recur);
    match key.to_ascii_uppercase().as_str() {
        "FREQ" => {
            rrule.freq =
                Some(Frequency::parse(value).ok_or_else(|| bad(ParseErrorKind::InvalidFrequency))?);
        }
        "INTERVAL" => {
            rrule.interval = Some(
                value
                    .parse()
                    .map_err(|_| bad(ParseErrorKind::InvalidRRule))?,
            );
        }
        "COUNT" => {
            if rrule.until.is_some() {
                return Err(bad(ParseErrorKind::UntilCountConflict));
            }
            rrule.count = Some(
                value
                    .parse()
                    .map_err(|_| bad(ParseErrorKind::InvalidRRule))?,
            );
        }
        "UNTIL" => {
            if rrule.count.is_some() {
                return Err(bad(ParseErrorKind::UntilCountConflict));
            }
            // UNTIL can be DATE or DATE-TIME
            rrule.until = Some(parse_datetime(value).map_err(|_| bad(ParseErrorKind::InvalidRRule))?);
        }
        "WKST" => {
            rrule.wkst =
                Some(Weekday::parse(value).ok_or_else(|| bad(ParseErrorKind::InvalidWeekday))?);
        }
        "BYSECOND" => rrule.by_second = parse_list(value, s)?,
        "BYMINUTE" => rrule.by_minute = parse_list(value, s)?,
        "BYHOUR" => rrule.by_hour = parse_list(value, s)?,
        "BYDAY" => rrule.by_day = parse_byday(value, s)?,
        "BYMONTHDAY" => rrule.by_monthday = parse_list(value, s)?,
        "BYYEARDAY" => rrule.by_yearday = parse_list(value, s)?,
        "BYWEEKNO" => rrule.by_weekno = parse_list(value, s)?,
        "BYMONTH" => rrule.by_month = parse_list(value, s)?,
        "BYSETPOS" => rrule.by_setpos = parse_list(value, s)?,
        _ => tracing::debug!(key, "Ignoring unknown RRULE part"),
    }
    Ok(())
}

/// Parses a comma-separated list of numbers.
fn parse_list<T: FromStr>(value: &str, s: &str) -> ParseResult<Vec<T>> {
    value
        .split(',')
        .map(|v| {
            v.trim().parse().map_err(|_| {
                ParseError::new(ParseErrorKind::InvalidRRule, s).with_value_kind(ValueKind::Recur)
            })
        })
        .collect()
}

/// Parses a BYDAY value (weekdays with optional ordinals).
fn parse_byday(value: &str, s: &str) -> ParseResult<Vec<WeekdayNum>> {
    value
        .split(',')
        .map(|v| parse_weekday_num(v.trim(), s))
        .collect()
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "-1FR").
fn parse_weekday_num(v: &str, s: &str) -> ParseResult<WeekdayNum> {
    let bad = |kind| ParseError::new(kind, s).with_value_kind(ValueKind::Recur);

    // The weekday is always the last two characters
    let split = v
        .len()
        .checked_sub(2)
        .filter(|&at| v.is_char_boundary(at))
        .ok_or_else(|| bad(ParseErrorKind::InvalidWeekday))?;
    let (ordinal_str, weekday_str) = v.split_at(split);

    let weekday = Weekday::parse(weekday_str).ok_or_else(|| bad(ParseErrorKind::InvalidWeekday))?;

    if ordinal_str.is_empty() {
        return Ok(WeekdayNum::every(weekday));
    }
    let ordinal = ordinal_str
        .parse()
        .map_err(|_| bad(ParseErrorKind::InvalidRRule))?;
    WeekdayNum::nth(ordinal, weekday).ok_or_else(|| bad(ParseErrorKind::InvalidRRule))
}

/// Parses a REQUEST-STATUS value (RFC 5545 §3.8.8.3).
///
/// The description in the text is not kept; printing uses the registered
/// description of the code. Text after the second `;` is kept as data.
///
/// ## Errors
/// Returns an error if the status code is missing or not registered.
pub fn parse_request_status(s: &str) -> ParseResult<RequestStatus> {
    let bad = |context: &str| {
        ParseError::new(ParseErrorKind::InvalidRequestStatus, s)
            .with_value_kind(ValueKind::RequestStatus)
            .with_context(context)
    };

    let mut parts = s.splitn(3, ';');
    let code_str = parts.next().unwrap_or_default().trim();
    let mut numbers = code_str.split('.');
    let major = numbers.next().and_then(|n| fixed_digits(n, 0..n.len()));
    let minor = numbers.next().and_then(|n| fixed_digits(n, 0..n.len()));

    let (Some(major), Some(minor)) = (major, minor) else {
        return Err(bad("expected a major.minor status code"));
    };
    let code = StatusCode::registered(major, minor)
        .ok_or_else(|| bad(&format!("unknown request status code {major}.{minor}")))?;

    // Skip the description
    let data = parts.nth(1).filter(|d| !d.is_empty()).map(str::to_string);

    Ok(RequestStatus {
        code,
        description: None,
        data,
    })
}

/// Parses a BOOLEAN value (RFC 5545 §3.3.2).
///
/// ## Errors
/// Returns an error if the string is not exactly "TRUE" or "FALSE".
pub fn parse_boolean(s: &str) -> ParseResult<bool> {
    match s {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        _ => Err(
            ParseError::new(ParseErrorKind::InvalidBoolean, s).with_value_kind(ValueKind::Boolean),
        ),
    }
}

/// Parses a GEO value (RFC 5545 §3.8.1.6): two numerals separated by `;`,
/// whitespace allowed around each.
///
/// ## Errors
/// Returns an error if either numeral is missing or the `;` is absent.
pub fn parse_geo(s: &str) -> ParseResult<Geo> {
    let bad = || ParseError::new(ParseErrorKind::InvalidGeo, s).with_value_kind(ValueKind::Geo);

    let lat = float_prefix(s, GEO_COORD_MAX_LEN).map_err(|_| bad())?;
    let rest = lat
        .rest
        .trim_start_matches(|c: char| c.is_ascii_whitespace())
        .strip_prefix(';')
        .ok_or_else(bad)?;
    let lon = float_prefix(rest, GEO_COORD_MAX_LEN).map_err(|_| bad())?;

    Ok(Geo::new(
        GeoCoord::from_numeral(&lat.text),
        GeoCoord::from_numeral(&lon.text),
    ))
}

#[cfg(test)]
#[path = "values_tests.rs"]
mod tests;
