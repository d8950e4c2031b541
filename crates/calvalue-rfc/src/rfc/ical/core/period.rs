//! PERIOD (RFC 5545 §3.3.9) and the composite payloads built on it:
//! date-time-or-period (RDATE) and TRIGGER (§3.8.6.3).

use std::fmt;

use super::{DateTime, Duration};

/// PERIOD value (RFC 5545 §3.3.9).
///
/// A precise period of time, defined by either:
/// - An explicit start and end (both DATE-TIME)
/// - A start DATE-TIME and a DURATION
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Explicit { start: DateTime, end: DateTime },
    Duration { start: DateTime, duration: Duration },
}

impl Period {
    /// Creates an explicit period from start to end.
    #[must_use]
    pub const fn explicit(start: DateTime, end: DateTime) -> Self {
        Self::Explicit { start, end }
    }

    /// Creates a period from a start time and duration.
    #[must_use]
    pub const fn from_duration(start: DateTime, duration: Duration) -> Self {
        Self::Duration { start, duration }
    }

    /// Returns the start of the period.
    #[must_use]
    pub const fn start(&self) -> &DateTime {
        match self {
            Self::Explicit { start, .. } | Self::Duration { start, .. } => start,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit { start, end } => write!(f, "{start}/{end}"),
            Self::Duration { start, duration } => write!(f, "{start}/{duration}"),
        }
    }
}

/// Payload of DATE-TIME-PERIOD values: a single instant or a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimePeriod {
    DateTime(DateTime),
    Period(Period),
}

impl fmt::Display for DateTimePeriod {
    /// The temporal form wins when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Period(period) => write!(f, "{period}"),
        }
    }
}

/// TRIGGER payload: an offset relative to the alarm's anchor, or an
/// absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Relative(Duration),
    Absolute(DateTime),
}

impl Default for Trigger {
    fn default() -> Self {
        Self::Relative(Duration::zero())
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(dt) => write!(f, "{dt}"),
            Self::Relative(duration) => write!(f, "{duration}"),
        }
    }
}
