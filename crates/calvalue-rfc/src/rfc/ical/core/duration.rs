//! iCalendar DURATION value type (RFC 5545 §3.3.6).

use std::fmt;

/// Duration value (RFC 5545 §3.3.6).
///
/// Either week-based (`P2W`) or day/time-based (`P1DT2H30M`). Year and
/// month designators do not exist in iCalendar durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    /// Whether this duration is negative.
    pub negative: bool,
    /// Number of weeks (mutually exclusive with days/hours/minutes/seconds).
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Duration {
    /// Creates a new zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            negative: false,
            weeks: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }

    /// Creates a duration from weeks.
    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self {
            weeks,
            ..Self::zero()
        }
    }

    /// Creates a duration from days.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::zero()
        }
    }

    /// Creates a duration from hours.
    #[must_use]
    pub const fn hours(hours: u32) -> Self {
        Self {
            hours,
            ..Self::zero()
        }
    }

    /// Creates a duration from minutes.
    #[must_use]
    pub const fn minutes(minutes: u32) -> Self {
        Self {
            minutes,
            ..Self::zero()
        }
    }

    /// Creates a duration from seconds.
    #[must_use]
    pub const fn seconds(seconds: u32) -> Self {
        Self {
            seconds,
            ..Self::zero()
        }
    }

    /// Builds a day/time duration from its components.
    #[must_use]
    pub const fn from_parts(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            negative: false,
            weeks: 0,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Negates this duration.
    #[must_use]
    pub const fn negate(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    /// Returns whether this is a week-based duration.
    #[must_use]
    pub const fn is_week_based(&self) -> bool {
        self.weeks > 0
    }

    /// Returns the signed total as seconds. This is the ordering key used when
    /// comparing DURATION values.
    #[must_use]
    pub const fn as_seconds(&self) -> i64 {
        let total = (self.weeks as i64 * 7 * 24 * 3600)
            + (self.days as i64 * 24 * 3600)
            + (self.hours as i64 * 3600)
            + (self.minutes as i64 * 60)
            + (self.seconds as i64);

        if self.negative { -total } else { total }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;

        if self.is_week_based() {
            return write!(f, "{}W", self.weeks);
        }

        let has_time = self.hours > 0 || self.minutes > 0 || self.seconds > 0;
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        } else if !has_time {
            return write!(f, "0D");
        } else {
            // time-only, e.g. PT15M
        }

        if has_time {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_display_weeks() {
        assert_eq!(Duration::weeks(2).to_string(), "P2W");
    }

    #[test]
    fn duration_display_days_time() {
        assert_eq!(Duration::from_parts(1, 2, 30, 0).to_string(), "P1DT2H30M");
    }

    #[test]
    fn duration_display_time_only() {
        assert_eq!(Duration::minutes(15).to_string(), "PT15M");
    }

    #[test]
    fn duration_display_negative() {
        assert_eq!(Duration::minutes(15).negate().to_string(), "-PT15M");
    }

    #[test]
    fn duration_display_zero() {
        assert_eq!(Duration::zero().to_string(), "P0D");
    }

    #[test]
    fn duration_as_seconds() {
        let d = Duration::from_parts(1, 2, 30, 0);
        assert_eq!(d.as_seconds(), 24 * 3600 + 2 * 3600 + 30 * 60);
        assert_eq!(Duration::minutes(15).negate().as_seconds(), -15 * 60);
        assert_eq!(Duration::weeks(1).as_seconds(), 7 * 24 * 3600);
    }
}
