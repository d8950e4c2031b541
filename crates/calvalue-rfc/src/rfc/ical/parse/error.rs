//! Value parsing diagnostics.

use std::fmt;

use crate::rfc::ical::core::ValueKind;

/// Result type for value parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Diagnostic produced when text cannot be turned into a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// The offending literal.
    pub input: String,
    /// Kind the literal was parsed as, when known.
    pub value_kind: Option<ValueKind>,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            value_kind: None,
            context: None,
        }
    }

    #[must_use]
    pub const fn with_value_kind(mut self, value_kind: ValueKind) -> Self {
        self.value_kind = Some(value_kind);
        self
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Coarse classification, as carried by an `X-LIC-ERRORTYPE` parameter.
    #[must_use]
    pub const fn error_type(&self) -> ErrorType {
        match self.kind {
            ParseErrorKind::InvalidParameterName => ErrorType::ParameterNameParseError,
            ParseErrorKind::InvalidParameterValue => ErrorType::ParameterValueParseError,
            _ => ErrorType::ValueParseError,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::InvalidBoolean | ParseErrorKind::InvalidGeo => write!(
                f,
                "Could not parse {} as a {} property",
                self.input,
                self.value_kind.map_or("value", ValueKind::as_str)
            )?,
            ParseErrorKind::UnknownValueKind => write!(f, "Unknown type for '{}'", self.input)?,
            ParseErrorKind::InvalidParameterName => {
                write!(f, "Cannot parse parameter name: '{}'", self.input)?;
            }
            ParseErrorKind::InvalidParameterValue => {
                write!(f, "Cannot parse parameter value: '{}'", self.input)?;
            }
            _ => write!(f, "Failed to parse value: '{}'", self.input)?,
        }
        if let Some(ref ctx) = self.context {
            write!(f, " ({}: {ctx})", self.kind)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Coarse error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// A property value could not be parsed.
    ValueParseError,
    /// A parameter name is missing or malformed.
    ParameterNameParseError,
    /// A parameter value is malformed.
    ParameterValueParseError,
}

impl ErrorType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValueParseError => "VALUE-PARSE-ERROR",
            Self::ParameterNameParseError => "PARAMETER-NAME-PARSE-ERROR",
            Self::ParameterValueParseError => "PARAMETER-VALUE-PARSE-ERROR",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not exactly `TRUE` or `FALSE`.
    InvalidBoolean,
    /// Missing coordinate or `;` separator.
    InvalidGeo,
    /// No numeral where one was required.
    InvalidNumber,
    /// Invalid date format.
    InvalidDate,
    /// Invalid time format.
    InvalidTime,
    /// Invalid date-time format.
    InvalidDateTime,
    /// Invalid duration format.
    InvalidDuration,
    /// Invalid period format.
    InvalidPeriod,
    /// Neither a duration nor a date-time.
    InvalidTrigger,
    /// Invalid recurrence rule.
    InvalidRRule,
    /// Invalid frequency.
    InvalidFrequency,
    /// Invalid weekday.
    InvalidWeekday,
    /// UNTIL and COUNT are mutually exclusive.
    UntilCountConflict,
    /// Status code missing or not registered.
    InvalidRequestStatus,
    /// Attachment data could not be decoded.
    InvalidAttachment,
    /// The value kind itself is not known.
    UnknownValueKind,
    /// Text does not fit the requested buffer.
    TooLong,
    /// Parameter text without `=`, or with an empty or malformed name.
    InvalidParameterName,
    /// Unterminated quoting, or a value the parameter kind rejects.
    InvalidParameterValue,
    /// Invalid property value.
    InvalidValue,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoolean => write!(f, "invalid boolean value"),
            Self::InvalidGeo => write!(f, "invalid geographic position"),
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::InvalidDate => write!(f, "invalid date format"),
            Self::InvalidTime => write!(f, "invalid time format"),
            Self::InvalidDateTime => write!(f, "invalid date-time format"),
            Self::InvalidDuration => write!(f, "invalid duration format"),
            Self::InvalidPeriod => write!(f, "invalid period format"),
            Self::InvalidTrigger => write!(f, "invalid trigger"),
            Self::InvalidRRule => write!(f, "invalid recurrence rule"),
            Self::InvalidFrequency => write!(f, "invalid frequency"),
            Self::InvalidWeekday => write!(f, "invalid weekday"),
            Self::UntilCountConflict => write!(f, "UNTIL and COUNT are mutually exclusive"),
            Self::InvalidRequestStatus => write!(f, "invalid request status"),
            Self::InvalidAttachment => write!(f, "invalid attachment"),
            Self::UnknownValueKind => write!(f, "unknown value kind"),
            Self::TooLong => write!(f, "text too long"),
            Self::InvalidParameterName => write!(f, "invalid parameter name"),
            Self::InvalidParameterValue => write!(f, "invalid parameter value"),
            Self::InvalidValue => write!(f, "invalid property value"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
