//! iCalendar DATE, TIME, DATE-TIME and UTC-OFFSET value types
//! (RFC 5545 §3.3.4, §3.3.5, §3.3.12, §3.3.14).

use std::fmt;

/// UTC offset representation (e.g., +0530, -0800, -013015).
///
/// Stored as total seconds from UTC. No range check is applied here; the
/// printer clamps each field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UtcOffset {
    /// Total seconds from UTC (positive = east, negative = west).
    seconds: i32,
}

impl UtcOffset {
    /// UTC offset (zero).
    pub const UTC: Self = Self { seconds: 0 };

    /// Creates a UTC offset from signed hours, minutes and seconds.
    ///
    /// The sign of `hours` applies to the whole offset.
    #[must_use]
    pub const fn new(hours: i32, minutes: i32, seconds: i32) -> Self {
        let magnitude = hours.abs() * 3600 + minutes * 60 + seconds;
        Self {
            seconds: if hours < 0 { -magnitude } else { magnitude },
        }
    }

    /// Creates a UTC offset from total seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Returns the offset as total seconds from UTC.
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.seconds
    }
}

impl fmt::Display for UtcOffset {
    /// `+HHMM`, or `+HHMMSS` when the seconds field is non-zero. Fields are
    /// clamped to 23/59/59.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.seconds;
        let sign = if data >= 0 { '+' } else { '-' };

        let h = data / 3600;
        let m = (data - h * 3600) / 60;
        let s = data - h * 3600 - m * 60;

        let h = h.abs().min(23);
        let m = m.abs().min(59);
        let s = s.abs().min(59);

        if s == 0 {
            write!(f, "{sign}{h:02}{m:02}")
        } else {
            write!(f, "{sign}{h:02}{m:02}{s:02}")
        }
    }
}

/// DATE value (RFC 5545 §3.3.4).
///
/// A calendar date without time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Date {
    /// Creates a new date.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns whether the date exists in the proleptic Gregorian calendar.
    #[must_use]
    pub fn is_valid(self) -> bool {
        chrono::NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
            .is_some()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Time of day (RFC 5545 §3.3.12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// Whether this time is in UTC (indicated by 'Z' suffix).
    pub is_utc: bool,
}

impl Time {
    /// Creates a new time value.
    #[must_use]
    pub const fn new(hour: u8, minute: u8, second: u8, is_utc: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            is_utc,
        }
    }

    /// Creates a UTC time.
    #[must_use]
    pub const fn utc(hour: u8, minute: u8, second: u8) -> Self {
        Self::new(hour, minute, second, true)
    }

    /// Creates a local (non-UTC) time.
    #[must_use]
    pub const fn local(hour: u8, minute: u8, second: u8) -> Self {
        Self::new(hour, minute, second, false)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}{:02}", self.hour, self.minute, self.second)?;
        if self.is_utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

/// Payload of DATE and DATE-TIME values.
///
/// A date with an optional time of day. A value without a time of day is a
/// DATE; the value kind is narrowed to match after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    pub date: Date,
    pub time: Option<Time>,
}

impl DateTime {
    /// Creates a date-only value.
    #[must_use]
    pub const fn date(year: u16, month: u8, day: u8) -> Self {
        Self {
            date: Date::new(year, month, day),
            time: None,
        }
    }

    /// Creates a floating DATE-TIME.
    #[must_use]
    pub const fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            date: Date::new(year, month, day),
            time: Some(Time::local(hour, minute, second)),
        }
    }

    /// Creates a UTC DATE-TIME.
    #[must_use]
    pub const fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            date: Date::new(year, month, day),
            time: Some(Time::utc(hour, minute, second)),
        }
    }

    /// Returns whether this value carries no time of day.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        self.time.is_none()
    }

    /// Returns whether this is a UTC time.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.time.is_some_and(|t| t.is_utc)
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self { date, time: None }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date)?;
        if let Some(time) = self.time {
            write!(f, "T{time}")?;
        }
        Ok(())
    }
}
