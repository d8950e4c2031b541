//! REQUEST-STATUS value type (RFC 5545 §3.8.8.3, RFC 5546 §3.6).

use std::fmt;

const REGISTERED: &[(u8, u8, &str)] = &[
    (2, 0, "Success."),
    (2, 1, "Success but fallback taken on one or more property values."),
    (2, 2, "Success, invalid property ignored."),
    (2, 3, "Success, invalid property parameter ignored."),
    (2, 4, "Success, unknown non-standard property ignored."),
    (2, 5, "Success, unknown non-standard property value ignored."),
    (2, 6, "Success, invalid calendar component ignored."),
    (2, 7, "Success, request forwarded to Calendar User."),
    (2, 8, "Success, repeating event ignored. Scheduled as a single component."),
    (2, 9, "Success, truncated end date time to date boundary."),
    (2, 10, "Success, repeating VTODO ignored. Scheduled as a single VTODO."),
    (2, 11, "Success, unbounded RRULE clipped at some finite number of instances."),
    (3, 0, "Invalid property name."),
    (3, 1, "Invalid property value."),
    (3, 2, "Invalid property parameter."),
    (3, 3, "Invalid property parameter value."),
    (3, 4, "Invalid calendar component sequence."),
    (3, 5, "Invalid date or time."),
    (3, 6, "Invalid rule."),
    (3, 7, "Invalid Calendar User."),
    (3, 8, "No authority."),
    (3, 9, "Unsupported version."),
    (3, 10, "Request entity too large."),
    (3, 11, "Required component or property missing."),
    (3, 12, "Unknown component or property found."),
    (3, 13, "Unsupported component or property found."),
    (3, 14, "Unsupported capability."),
    (4, 0, "Event conflict. Date/time is busy."),
    (5, 0, "Request MAY supported."),
    (5, 1, "Service unavailable."),
    (5, 2, "Invalid calendar service."),
    (5, 3, "No scheduling support for user."),
];

/// A registered `major.minor` status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode {
    major: u8,
    minor: u8,
}

impl StatusCode {
    pub const SUCCESS: Self = Self { major: 2, minor: 0 };

    /// Returns the code if it is registered.
    #[must_use]
    pub fn registered(major: u8, minor: u8) -> Option<Self> {
        REGISTERED
            .iter()
            .any(|&(ma, mi, _)| ma == major && mi == minor)
            .then_some(Self { major, minor })
    }

    #[must_use]
    pub const fn major(self) -> u8 {
        self.major
    }

    #[must_use]
    pub const fn minor(self) -> u8 {
        self.minor
    }

    /// The registered description for this code.
    #[must_use]
    pub fn description(self) -> &'static str {
        REGISTERED
            .iter()
            .find(|&&(ma, mi, _)| ma == self.major && mi == self.minor)
            .map_or("", |&(_, _, desc)| desc)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// `statcode ";" statdesc [";" extdata]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestStatus {
    pub code: StatusCode,
    /// Overrides the registered description when printing.
    pub description: Option<String>,
    /// Exception data, typically the offending property text.
    pub data: Option<String>,
}

impl RequestStatus {
    #[must_use]
    pub const fn new(code: StatusCode) -> Self {
        Self {
            code,
            description: None,
            data: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        Self::new(StatusCode::SUCCESS)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = self
            .description
            .as_deref()
            .unwrap_or_else(|| self.code.description());
        write!(f, "{};{description}", self.code)?;
        if let Some(data) = &self.data {
            write!(f, ";{data}")?;
        }
        Ok(())
    }
}
