//! The closed registry of value kinds.

use std::fmt;

use super::PropertyKind;

/// Discriminant of a [`Value`](super::Value).
///
/// Names match the `VALUE=` parameter spelling where RFC 5545 defines one;
/// the remaining kinds are named after the property they serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Action,
    Attach,
    Binary,
    Boolean,
    BusyType,
    CalAddress,
    CarLevel,
    Class,
    Cmd,
    Date,
    DateTime,
    DateTimePeriod,
    Duration,
    Float,
    Geo,
    Integer,
    Method,
    Period,
    PollCompletion,
    PollMode,
    ParticipantType,
    Proximity,
    Query,
    QueryLevel,
    Recur,
    RequestStatus,
    ResourceType,
    Status,
    String,
    Text,
    Transp,
    Trigger,
    Uid,
    Uri,
    UtcOffset,
    XmlReference,
    /// Catch-all extension kind; the literal lives in the value's extension text.
    X,
    /// Sentinel for "no kind". Never a valid construction target.
    NoValue,
}

impl ValueKind {
    /// Every registered kind, excluding the `NoValue` sentinel.
    pub const ALL: [Self; 37] = [
        Self::Action,
        Self::Attach,
        Self::Binary,
        Self::Boolean,
        Self::BusyType,
        Self::CalAddress,
        Self::CarLevel,
        Self::Class,
        Self::Cmd,
        Self::Date,
        Self::DateTime,
        Self::DateTimePeriod,
        Self::Duration,
        Self::Float,
        Self::Geo,
        Self::Integer,
        Self::Method,
        Self::Period,
        Self::PollCompletion,
        Self::PollMode,
        Self::ParticipantType,
        Self::Proximity,
        Self::Query,
        Self::QueryLevel,
        Self::Recur,
        Self::RequestStatus,
        Self::ResourceType,
        Self::Status,
        Self::String,
        Self::Text,
        Self::Transp,
        Self::Trigger,
        Self::Uid,
        Self::Uri,
        Self::UtcOffset,
        Self::XmlReference,
        Self::X,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "ACTION",
            Self::Attach => "ATTACH",
            Self::Binary => "BINARY",
            Self::Boolean => "BOOLEAN",
            Self::BusyType => "BUSYTYPE",
            Self::CalAddress => "CAL-ADDRESS",
            Self::CarLevel => "CAR-LEVEL",
            Self::Class => "CLASS",
            Self::Cmd => "CMD",
            Self::Date => "DATE",
            Self::DateTime => "DATE-TIME",
            Self::DateTimePeriod => "DATE-TIME-PERIOD",
            Self::Duration => "DURATION",
            Self::Float => "FLOAT",
            Self::Geo => "GEO",
            Self::Integer => "INTEGER",
            Self::Method => "METHOD",
            Self::Period => "PERIOD",
            Self::PollCompletion => "POLLCOMPLETION",
            Self::PollMode => "POLLMODE",
            Self::ParticipantType => "PARTICIPANTTYPE",
            Self::Proximity => "PROXIMITY",
            Self::Query => "QUERY",
            Self::QueryLevel => "QUERY-LEVEL",
            Self::Recur => "RECUR",
            Self::RequestStatus => "REQUEST-STATUS",
            Self::ResourceType => "RESOURCETYPE",
            Self::Status => "STATUS",
            Self::String => "STRING",
            Self::Text => "TEXT",
            Self::Transp => "TRANSP",
            Self::Trigger => "TRIGGER",
            Self::Uid => "UID",
            Self::Uri => "URI",
            Self::UtcOffset => "UTC-OFFSET",
            Self::XmlReference => "XML-REFERENCE",
            Self::X => "X",
            Self::NoValue => "NO",
        }
    }

    /// Looks up a registered kind by name (case-insensitive).
    ///
    /// Returns `None` for unknown names and for the `NoValue` sentinel.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns the property whose enumeration backs this kind, for the
    /// enumerated-token kinds.
    #[must_use]
    pub const fn property_kind(self) -> Option<PropertyKind> {
        Some(match self {
            Self::Action => PropertyKind::Action,
            Self::BusyType => PropertyKind::BusyType,
            Self::CarLevel => PropertyKind::CarLevel,
            Self::Class => PropertyKind::Class,
            Self::Cmd => PropertyKind::Cmd,
            Self::Method => PropertyKind::Method,
            Self::PollCompletion => PropertyKind::PollCompletion,
            Self::PollMode => PropertyKind::PollMode,
            Self::ParticipantType => PropertyKind::ParticipantType,
            Self::Proximity => PropertyKind::Proximity,
            Self::QueryLevel => PropertyKind::QueryLevel,
            Self::ResourceType => PropertyKind::ResourceType,
            Self::Status => PropertyKind::Status,
            Self::Transp => PropertyKind::Transp,
            _ => return None,
        })
    }

    /// Returns whether this is one of the enumerated-token kinds.
    #[must_use]
    pub const fn is_token(self) -> bool {
        self.property_kind().is_some()
    }

    /// Returns whether the kind is in the registry (anything but `NoValue`).
    #[must_use]
    pub const fn is_registered(self) -> bool {
        !matches!(self, Self::NoValue)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
