//! Property kinds and the owning side of the value/parent relationship.
//!
//! A [`Property`] is the smallest owner a value can have: it records which
//! property the value belongs to, which the printer needs for quoting, and
//! takes over the value's lifetime while it holds it.

use std::fmt;

use super::{Parameter, ParameterKind, Value, ValueKind};
use crate::rfc::ical::parse::{ParseResult, parse_value};
use calvalue_core::constants::EXTENSION_PREFIX;

macro_rules! define_property_kinds {
    ($($variant:ident => $name:literal, $value_kind:ident;)+) => {
        /// iCalendar property names known to the codec (RFC 5545 §3.7, §3.8,
        /// RFC 5546, RFC 7953, RFC 9073, RFC 9074 and the VPOLL draft).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PropertyKind {
            $($variant,)+
            /// Any `X-` property.
            X,
        }

        impl PropertyKind {
            /// Every named property kind.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the property name as written in a content line.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                    Self::X => "X",
                }
            }

            /// Returns the value kind a property of this kind carries when no
            /// `VALUE=` parameter overrides it.
            #[must_use]
            pub const fn default_value_kind(self) -> ValueKind {
                match self {
                    $(Self::$variant => ValueKind::$value_kind,)+
                    Self::X => ValueKind::X,
                }
            }
        }
    };
}

define_property_kinds! {
    Action => "ACTION", Action;
    Attach => "ATTACH", Uri;
    Attendee => "ATTENDEE", CalAddress;
    BusyType => "BUSYTYPE", BusyType;
    CalScale => "CALSCALE", Text;
    CarLevel => "CARLEVEL", CarLevel;
    Categories => "CATEGORIES", Text;
    Class => "CLASS", Class;
    Cmd => "CMD", Cmd;
    Comment => "COMMENT", Text;
    Completed => "COMPLETED", DateTime;
    Contact => "CONTACT", Text;
    Created => "CREATED", DateTime;
    Description => "DESCRIPTION", Text;
    DtEnd => "DTEND", DateTime;
    DtStamp => "DTSTAMP", DateTime;
    DtStart => "DTSTART", DateTime;
    Due => "DUE", DateTime;
    Duration => "DURATION", Duration;
    ExDate => "EXDATE", DateTime;
    FreeBusy => "FREEBUSY", Period;
    Geo => "GEO", Geo;
    LastModified => "LAST-MODIFIED", DateTime;
    Location => "LOCATION", Text;
    LocationType => "LOCATION-TYPE", Text;
    Method => "METHOD", Method;
    Organizer => "ORGANIZER", CalAddress;
    ParticipantType => "PARTICIPANT-TYPE", ParticipantType;
    PercentComplete => "PERCENT-COMPLETE", Integer;
    PollCompletion => "POLL-COMPLETION", PollCompletion;
    PollMode => "POLL-MODE", PollMode;
    PollProperties => "POLL-PROPERTIES", Text;
    Priority => "PRIORITY", Integer;
    ProdId => "PRODID", Text;
    Proximity => "PROXIMITY", Proximity;
    Query => "QUERY", Query;
    QueryLevel => "QUERYLEVEL", QueryLevel;
    RDate => "RDATE", DateTimePeriod;
    RecurrenceId => "RECURRENCE-ID", DateTime;
    RelatedTo => "RELATED-TO", Text;
    Repeat => "REPEAT", Integer;
    RequestStatus => "REQUEST-STATUS", RequestStatus;
    Resources => "RESOURCES", Text;
    ResourceType => "RESOURCE-TYPE", ResourceType;
    RRule => "RRULE", Recur;
    Sequence => "SEQUENCE", Integer;
    Status => "STATUS", Status;
    StructuredData => "STRUCTURED-DATA", Text;
    Summary => "SUMMARY", Text;
    Transp => "TRANSP", Transp;
    Trigger => "TRIGGER", Trigger;
    TzId => "TZID", Text;
    TzOffsetFrom => "TZOFFSETFROM", UtcOffset;
    TzOffsetTo => "TZOFFSETTO", UtcOffset;
    Uid => "UID", Text;
    Url => "URL", Uri;
    Version => "VERSION", Text;
    XmlReference => "XML-REFERENCE", XmlReference;
}

impl PropertyKind {
    /// Resolves a property name (case-insensitive). Any `X-` name maps to
    /// [`PropertyKind::X`]; other unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name
            .get(..EXTENSION_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(EXTENSION_PREFIX))
        {
            return Some(Self::X);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Properties whose TEXT values are lists, so `,` and `;` are separators
    /// rather than content and must not be escaped when printing.
    #[must_use]
    pub const fn keeps_separators(self, value_kind: ValueKind) -> bool {
        match self {
            Self::Categories | Self::Resources | Self::PollProperties | Self::LocationType => true,
            Self::X => !matches!(value_kind, ValueKind::Text),
            _ => false,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-owning link from a value to the property that holds it.
///
/// While a value carries a `ParentRef`, its lifetime belongs to that
/// property and [`Value::free`] hands it back instead of releasing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentRef {
    kind: PropertyKind,
}

impl ParentRef {
    #[must_use]
    pub const fn new(kind: PropertyKind) -> Self {
        Self { kind }
    }

    /// The kind of the owning property.
    #[must_use]
    pub const fn property_kind(self) -> PropertyKind {
        self.kind
    }
}

/// A property holding its parameters and at most one value.
#[derive(Debug)]
pub struct Property {
    kind: PropertyKind,
    name: String,
    parameters: Vec<Parameter>,
    value: Option<Value>,
}

impl Property {
    #[must_use]
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            name: kind.as_str().to_string(),
            parameters: Vec::new(),
            value: None,
        }
    }

    /// Creates a property from its content-line name, falling back to an
    /// extension property for names outside the registry.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self {
            kind: PropertyKind::from_name(name).unwrap_or(PropertyKind::X),
            name: name.to_ascii_uppercase(),
            parameters: Vec::new(),
            value: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The link stored in values held by this property.
    #[must_use]
    pub const fn parent_ref(&self) -> ParentRef {
        ParentRef::new(self.kind)
    }

    /// Takes ownership of `param` and links it to this property. A
    /// parameter with the same name is detached and returned.
    pub fn set_parameter(&mut self, mut param: Parameter) -> Option<Parameter> {
        param.set_parent(Some(self.parent_ref()));
        let previous = self
            .parameters
            .iter()
            .position(|p| p.has_same_name(&param))
            .map(|i| detach_parameter(self.parameters.remove(i)));
        self.parameters.push(param);
        previous
    }

    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// First parameter of `kind`.
    #[must_use]
    pub fn parameter(&self, kind: ParameterKind) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.kind() == kind)
    }

    /// Detaches the first parameter of `kind` and gives it to the caller.
    pub fn remove_parameter(&mut self, kind: ParameterKind) -> Option<Parameter> {
        let index = self.parameters.iter().position(|p| p.kind() == kind)?;
        Some(detach_parameter(self.parameters.remove(index)))
    }

    /// The kind named by a `VALUE=` parameter, or the property's default
    /// when there is none or it names no registered kind.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        self.parameter(ParameterKind::Value)
            .and_then(Parameter::value_kind)
            .unwrap_or_else(|| self.kind.default_value_kind())
    }

    /// ## Summary
    /// Parses `text` as [`Property::value_kind`] and holds the result. A
    /// value previously held is detached and returned.
    ///
    /// ## Errors
    /// Returns the parse error; the held value is left untouched.
    pub fn set_value_from_text(&mut self, text: &str) -> ParseResult<Option<Value>> {
        let value = parse_value(self.value_kind(), text)?;
        Ok(self.set_value(value))
    }

    /// Takes ownership of `value` and links it to this property. A value
    /// previously held is detached and returned to the caller.
    pub fn set_value(&mut self, mut value: Value) -> Option<Value> {
        value.set_parent(Some(self.parent_ref()));
        tracing::trace!(property = %self.name, kind = %value.kind(), "Value attached");
        self.value.replace(value).map(detach)
    }

    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub const fn value_mut(&mut self) -> Option<&mut Value> {
        self.value.as_mut()
    }

    /// Detaches the held value and gives its ownership to the caller.
    pub fn take_value(&mut self) -> Option<Value> {
        self.value.take().map(detach)
    }

    /// Prints the held value in the context of this property.
    #[must_use]
    pub fn value_as_text(&self) -> Option<String> {
        self.value.as_ref().and_then(Value::as_text)
    }
}

fn detach(mut value: Value) -> Value {
    value.set_parent(None);
    value
}

fn detach_parameter(mut param: Parameter) -> Parameter {
    param.set_parent(None);
    param
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_kind_from_name() {
        assert_eq!(PropertyKind::from_name("categories"), Some(PropertyKind::Categories));
        assert_eq!(PropertyKind::from_name("X-WR-CALNAME"), Some(PropertyKind::X));
        assert_eq!(PropertyKind::from_name("NOT-A-PROPERTY"), None);
    }

    #[test]
    fn default_value_kinds() {
        assert_eq!(PropertyKind::Summary.default_value_kind(), ValueKind::Text);
        assert_eq!(PropertyKind::TzOffsetFrom.default_value_kind(), ValueKind::UtcOffset);
        assert_eq!(PropertyKind::RDate.default_value_kind(), ValueKind::DateTimePeriod);
        assert_eq!(PropertyKind::X.default_value_kind(), ValueKind::X);
    }

    #[test]
    fn separator_allowlist() {
        assert!(PropertyKind::Categories.keeps_separators(ValueKind::Text));
        assert!(PropertyKind::LocationType.keeps_separators(ValueKind::Text));
        assert!(!PropertyKind::Summary.keeps_separators(ValueKind::Text));
        assert!(PropertyKind::X.keeps_separators(ValueKind::Integer));
        assert!(!PropertyKind::X.keeps_separators(ValueKind::Text));
    }

    #[test]
    fn set_value_links_parent_and_take_value_unlinks() {
        let mut prop = Property::new(PropertyKind::Summary);
        assert!(prop.set_value(Value::text("hello")).is_none());
        assert_eq!(
            prop.value().and_then(Value::parent),
            Some(ParentRef::new(PropertyKind::Summary))
        );

        let taken = prop.take_value();
        assert!(taken.as_ref().is_some_and(|v| v.parent().is_none()));
        assert!(prop.value().is_none());
    }

    #[test]
    fn set_value_returns_detached_previous_value() {
        let mut prop = Property::new(PropertyKind::Comment);
        prop.set_value(Value::text("first"));
        let previous = prop.set_value(Value::text("second"));
        let previous = previous.as_ref();
        assert!(previous.is_some_and(|v| v.parent().is_none()));
        assert_eq!(previous.and_then(Value::as_text).as_deref(), Some("first"));
    }

    #[test]
    fn set_parameter_replaces_same_name() {
        let mut prop = Property::new(PropertyKind::Attendee);
        assert!(prop.set_parameter(Parameter::with_value(ParameterKind::Cn, "A")).is_none());
        let old = prop.set_parameter(Parameter::with_value(ParameterKind::Cn, "B"));
        assert!(old.as_ref().is_some_and(|p| p.parent().is_none()));
        assert_eq!(old.as_ref().and_then(Parameter::xvalue), Some("A"));
        assert_eq!(prop.parameters().len(), 1);
        assert_eq!(
            prop.parameter(ParameterKind::Cn).and_then(Parameter::parent),
            Some(ParentRef::new(PropertyKind::Attendee))
        );

        let removed = prop.remove_parameter(ParameterKind::Cn);
        assert!(removed.is_some_and(|p| p.free().is_none()));
        assert!(prop.parameters().is_empty());
    }

    #[test]
    fn value_parameter_overrides_default_kind() {
        let mut prop = Property::new(PropertyKind::DtStart);
        assert_eq!(prop.value_kind(), ValueKind::DateTime);
        prop.set_parameter(Parameter::with_value(ParameterKind::Value, "DATE"));
        assert_eq!(prop.value_kind(), ValueKind::Date);
        prop.set_value_from_text("20260301").unwrap();
        assert_eq!(prop.value().map(Value::kind), Some(ValueKind::Date));

        prop.set_parameter(Parameter::with_value(ParameterKind::Value, "X-UNKNOWN"));
        assert_eq!(prop.value_kind(), ValueKind::DateTime);
    }

    #[test]
    fn failed_parse_keeps_held_value() {
        let mut prop = Property::new(PropertyKind::Geo);
        prop.set_value_from_text("1.5;2.5").unwrap();
        assert!(prop.set_value_from_text("1.5").is_err());
        assert_eq!(prop.value_as_text().as_deref(), Some("1.5;2.5"));
    }

    #[test]
    fn from_name_keeps_extension_name() {
        let prop = Property::from_name("x-custom");
        assert_eq!(prop.kind(), PropertyKind::X);
        assert_eq!(prop.name(), "X-CUSTOM");
    }
}
