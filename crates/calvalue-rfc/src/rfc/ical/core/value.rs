//! The kind-tagged property value.

use std::fmt;

use calvalue_core::config::CodecConfig;

use super::{
    Action, Attachment, BusyType, CarLevel, Class, Cmd, Date, DateTime, DateTimePeriod, Duration,
    Geo, Method, ParentRef, ParticipantType, Period, PollCompletion, PollMode, PropertyToken,
    Proximity, QueryLevel, RRule, RequestStatus, ResourceType, Status, Time, Transp, Trigger,
    UtcOffset, ValueKind,
};
use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::build;

/// Payload of a [`Value`], one variant per [`ValueKind`].
#[derive(Debug, Clone)]
pub enum ValueData {
    Action(Action),
    /// URL or inline data, shared between clones.
    Attach(Attachment),
    /// Inline data, shared between clones.
    Binary(Attachment),
    Boolean(bool),
    BusyType(BusyType),
    CalAddress(String),
    CarLevel(CarLevel),
    Class(Class),
    Cmd(Cmd),
    /// Normally date-only; see [`Value::reset_kind`].
    Date(DateTime),
    DateTime(DateTime),
    DateTimePeriod(DateTimePeriod),
    Duration(Duration),
    Float(f64),
    Geo(Geo),
    Integer(i32),
    Method(Method),
    Period(Period),
    PollCompletion(PollCompletion),
    PollMode(PollMode),
    ParticipantType(ParticipantType),
    Proximity(Proximity),
    Query(String),
    QueryLevel(QueryLevel),
    Recur(Box<RRule>),
    RequestStatus(RequestStatus),
    ResourceType(ResourceType),
    Status(Status),
    String(String),
    Text(String),
    Transp(Transp),
    Trigger(Trigger),
    Uid(String),
    Uri(String),
    UtcOffset(UtcOffset),
    XmlReference(String),
    /// The literal is kept in the value's extension text.
    X,
    /// Left behind by [`Value::free`].
    NoValue,
}

impl ValueData {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Action(_) => ValueKind::Action,
            Self::Attach(_) => ValueKind::Attach,
            Self::Binary(_) => ValueKind::Binary,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::BusyType(_) => ValueKind::BusyType,
            Self::CalAddress(_) => ValueKind::CalAddress,
            Self::CarLevel(_) => ValueKind::CarLevel,
            Self::Class(_) => ValueKind::Class,
            Self::Cmd(_) => ValueKind::Cmd,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::DateTimePeriod(_) => ValueKind::DateTimePeriod,
            Self::Duration(_) => ValueKind::Duration,
            Self::Float(_) => ValueKind::Float,
            Self::Geo(_) => ValueKind::Geo,
            Self::Integer(_) => ValueKind::Integer,
            Self::Method(_) => ValueKind::Method,
            Self::Period(_) => ValueKind::Period,
            Self::PollCompletion(_) => ValueKind::PollCompletion,
            Self::PollMode(_) => ValueKind::PollMode,
            Self::ParticipantType(_) => ValueKind::ParticipantType,
            Self::Proximity(_) => ValueKind::Proximity,
            Self::Query(_) => ValueKind::Query,
            Self::QueryLevel(_) => ValueKind::QueryLevel,
            Self::Recur(_) => ValueKind::Recur,
            Self::RequestStatus(_) => ValueKind::RequestStatus,
            Self::ResourceType(_) => ValueKind::ResourceType,
            Self::Status(_) => ValueKind::Status,
            Self::String(_) => ValueKind::String,
            Self::Text(_) => ValueKind::Text,
            Self::Transp(_) => ValueKind::Transp,
            Self::Trigger(_) => ValueKind::Trigger,
            Self::Uid(_) => ValueKind::Uid,
            Self::Uri(_) => ValueKind::Uri,
            Self::UtcOffset(_) => ValueKind::UtcOffset,
            Self::XmlReference(_) => ValueKind::XmlReference,
            Self::X => ValueKind::X,
            Self::NoValue => ValueKind::NoValue,
        }
    }

    /// Spelling of an enumerated token payload, `None` for other kinds.
    #[must_use]
    pub fn token_str(&self) -> Option<&'static str> {
        let token = match self {
            Self::Action(t) => t.as_str(),
            Self::BusyType(t) => t.as_str(),
            Self::CarLevel(t) => t.as_str(),
            Self::Class(t) => t.as_str(),
            Self::Cmd(t) => t.as_str(),
            Self::Method(t) => t.as_str(),
            Self::PollCompletion(t) => t.as_str(),
            Self::PollMode(t) => t.as_str(),
            Self::ParticipantType(t) => t.as_str(),
            Self::Proximity(t) => t.as_str(),
            Self::QueryLevel(t) => t.as_str(),
            Self::ResourceType(t) => t.as_str(),
            Self::Status(t) => t.as_str(),
            Self::Transp(t) => t.as_str(),
            _ => return None,
        };
        Some(token)
    }

    /// Zero payload for `kind`; `None` for the `NoValue` sentinel.
    fn zero(kind: ValueKind) -> Option<Self> {
        let null_date = DateTime::from(Date::new(0, 0, 0));
        let null_date_time = DateTime {
            time: Some(Time::local(0, 0, 0)),
            ..null_date
        };
        Some(match kind {
            ValueKind::Action => Self::Action(Action::None),
            ValueKind::Attach => Self::Attach(Attachment::from_url(String::new())),
            ValueKind::Binary => Self::Binary(Attachment::from_data(Vec::new())),
            ValueKind::Boolean => Self::Boolean(false),
            ValueKind::BusyType => Self::BusyType(BusyType::None),
            ValueKind::CalAddress => Self::CalAddress(String::new()),
            ValueKind::CarLevel => Self::CarLevel(CarLevel::None),
            ValueKind::Class => Self::Class(Class::None),
            ValueKind::Cmd => Self::Cmd(Cmd::None),
            ValueKind::Date => Self::Date(null_date),
            ValueKind::DateTime => Self::DateTime(null_date_time),
            ValueKind::DateTimePeriod => Self::DateTimePeriod(DateTimePeriod::DateTime(null_date_time)),
            ValueKind::Duration => Self::Duration(Duration::zero()),
            ValueKind::Float => Self::Float(0.0),
            ValueKind::Geo => Self::Geo(Geo::default()),
            ValueKind::Integer => Self::Integer(0),
            ValueKind::Method => Self::Method(Method::None),
            ValueKind::Period => Self::Period(Period::explicit(null_date_time, null_date_time)),
            ValueKind::PollCompletion => Self::PollCompletion(PollCompletion::None),
            ValueKind::PollMode => Self::PollMode(PollMode::None),
            ValueKind::ParticipantType => Self::ParticipantType(ParticipantType::None),
            ValueKind::Proximity => Self::Proximity(Proximity::None),
            ValueKind::Query => Self::Query(String::new()),
            ValueKind::QueryLevel => Self::QueryLevel(QueryLevel::None),
            ValueKind::Recur => Self::Recur(Box::default()),
            ValueKind::RequestStatus => Self::RequestStatus(RequestStatus::default()),
            ValueKind::ResourceType => Self::ResourceType(ResourceType::None),
            ValueKind::Status => Self::Status(Status::None),
            ValueKind::String => Self::String(String::new()),
            ValueKind::Text => Self::Text(String::new()),
            ValueKind::Transp => Self::Transp(Transp::None),
            ValueKind::Trigger => Self::Trigger(Trigger::default()),
            ValueKind::Uid => Self::Uid(String::new()),
            ValueKind::Uri => Self::Uri(String::new()),
            ValueKind::UtcOffset => Self::UtcOffset(UtcOffset::UTC),
            ValueKind::XmlReference => Self::XmlReference(String::new()),
            ValueKind::X => Self::X,
            ValueKind::NoValue => return None,
        })
    }
}

/// One typed property value.
///
/// A value linked to a property through [`Value::set_parent`] is borrowed
/// by that property: [`Value::free`] returns it untouched instead of
/// releasing it. Plain drops always release, like any Rust value.
#[derive(Debug)]
pub struct Value {
    data: ValueData,
    extension: Option<String>,
    parent: Option<ParentRef>,
}

impl Clone for Value {
    /// Copies the payload and extension text. Attachments are shared, not
    /// copied. The clone never has a parent.
    fn clone(&self) -> Self {
        tracing::trace!(kind = %self.kind(), "Cloning value");
        Self {
            data: self.data.clone(),
            extension: self.extension.clone(),
            parent: None,
        }
    }
}

impl Value {
    /// ## Summary
    /// Creates a value of `kind` with a zero payload, no parent and no
    /// extension text.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidKind` for the `NoValue` sentinel.
    pub fn new(kind: ValueKind) -> RfcResult<Self> {
        ValueData::zero(kind)
            .map(Self::from_data)
            .ok_or_else(|| RfcError::InvalidKind(kind.as_str().to_string()))
    }

    /// ## Summary
    /// Creates a value from a `VALUE=`-style kind name.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidKind` if the name is not registered.
    pub fn new_named(kind_name: &str) -> RfcResult<Self> {
        ValueKind::from_name(kind_name)
            .ok_or_else(|| RfcError::InvalidKind(kind_name.to_string()))
            .and_then(Self::new)
    }

    #[must_use]
    pub const fn from_data(data: ValueData) -> Self {
        Self {
            data,
            extension: None,
            parent: None,
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_data(ValueData::Text(text.into()))
    }

    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::from_data(ValueData::String(text.into()))
    }

    #[must_use]
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::from_data(ValueData::Uri(uri.into()))
    }

    #[must_use]
    pub fn cal_address(address: impl Into<String>) -> Self {
        Self::from_data(ValueData::CalAddress(address.into()))
    }

    #[must_use]
    pub fn uid(uid: impl Into<String>) -> Self {
        Self::from_data(ValueData::Uid(uid.into()))
    }

    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self::from_data(ValueData::Query(query.into()))
    }

    #[must_use]
    pub fn xml_reference(reference: impl Into<String>) -> Self {
        Self::from_data(ValueData::XmlReference(reference.into()))
    }

    #[must_use]
    pub const fn integer(value: i32) -> Self {
        Self::from_data(ValueData::Integer(value))
    }

    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::from_data(ValueData::Float(value))
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::from_data(ValueData::Boolean(value))
    }

    #[must_use]
    pub const fn utc_offset(offset: UtcOffset) -> Self {
        Self::from_data(ValueData::UtcOffset(offset))
    }

    /// DATE or DATE-TIME, depending on whether `value` has a time of day.
    #[must_use]
    pub fn date_time(value: DateTime) -> Self {
        let mut v = Self::from_data(ValueData::DateTime(value));
        v.reset_kind();
        v
    }

    #[must_use]
    pub const fn date(date: Date) -> Self {
        Self::from_data(ValueData::Date(DateTime { date, time: None }))
    }

    #[must_use]
    pub const fn date_time_period(value: DateTimePeriod) -> Self {
        Self::from_data(ValueData::DateTimePeriod(value))
    }

    #[must_use]
    pub const fn duration(value: Duration) -> Self {
        Self::from_data(ValueData::Duration(value))
    }

    #[must_use]
    pub const fn period(value: Period) -> Self {
        Self::from_data(ValueData::Period(value))
    }

    #[must_use]
    pub const fn trigger(value: Trigger) -> Self {
        Self::from_data(ValueData::Trigger(value))
    }

    #[must_use]
    pub fn recur(rule: RRule) -> Self {
        Self::from_data(ValueData::Recur(Box::new(rule)))
    }

    #[must_use]
    pub const fn geo(value: Geo) -> Self {
        Self::from_data(ValueData::Geo(value))
    }

    #[must_use]
    pub const fn request_status(value: RequestStatus) -> Self {
        Self::from_data(ValueData::RequestStatus(value))
    }

    #[must_use]
    pub const fn attach(attachment: Attachment) -> Self {
        Self::from_data(ValueData::Attach(attachment))
    }

    #[must_use]
    pub const fn binary(attachment: Attachment) -> Self {
        Self::from_data(ValueData::Binary(attachment))
    }

    /// An extension value carrying `literal` verbatim.
    #[must_use]
    pub fn x(literal: impl Into<String>) -> Self {
        Self {
            data: ValueData::X,
            extension: Some(literal.into()),
            parent: None,
        }
    }

    #[must_use]
    pub fn token<T: PropertyToken>(token: T) -> Self {
        Self::from_data(token.into_data())
    }

    /// A token value that did not match its enumeration.
    #[must_use]
    pub fn token_extension<T: PropertyToken>(literal: impl Into<String>) -> Self {
        Self {
            data: T::EXTENSION.into_data(),
            extension: Some(literal.into()),
            parent: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.data.kind()
    }

    #[must_use]
    pub const fn data(&self) -> &ValueData {
        &self.data
    }

    #[must_use]
    pub const fn parent(&self) -> Option<ParentRef> {
        self.parent
    }

    /// Links or unlinks the owning property. No ownership moves.
    pub const fn set_parent(&mut self, parent: Option<ParentRef>) {
        self.parent = parent;
    }

    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn set_extension(&mut self, text: impl Into<String>) {
        self.extension = Some(text.into());
    }

    /// Narrows DATE/DATE-TIME to match the payload: DATE when there is no
    /// time of day, DATE-TIME otherwise. Other kinds are left alone.
    pub fn reset_kind(&mut self) {
        let narrowed = match self.data {
            ValueData::Date(dt) | ValueData::DateTime(dt) if dt.is_date() => ValueData::Date(dt),
            ValueData::Date(dt) | ValueData::DateTime(dt) => ValueData::DateTime(dt),
            _ => return,
        };
        self.data = narrowed;
    }

    /// Releases the value unless a property owns it.
    ///
    /// A parented value is handed back unchanged: its lifetime belongs to
    /// the property. Otherwise the payload is replaced with `NoValue`, the
    /// old payload and extension text are dropped (shared attachments lose
    /// one reference), and `None` is returned.
    #[must_use = "a value returned by free is still owned by its parent"]
    pub fn free(mut self) -> Option<Self> {
        if let Some(parent) = self.parent {
            tracing::trace!(
                kind = %self.kind(),
                property = %parent.property_kind(),
                "Free suppressed for parented value"
            );
            return Some(self);
        }
        tracing::trace!(kind = %self.kind(), "Freeing value");
        drop(std::mem::replace(&mut self.data, ValueData::NoValue));
        self.extension = None;
        None
    }

    /// Canonical text using the default codec settings.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        build::print(self)
    }

    #[must_use]
    pub fn as_text_with(&self, config: &CodecConfig) -> Option<String> {
        build::print_with(self, config)
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i32> {
        match self.data {
            ValueData::Integer(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self.data {
            ValueData::Float(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self.data {
            ValueData::Boolean(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_utc_offset(&self) -> Option<UtcOffset> {
        match self.data {
            ValueData::UtcOffset(v) => Some(v),
            _ => None,
        }
    }

    /// The string payload of TEXT, STRING, URI, CAL-ADDRESS, UID, QUERY and
    /// XML-REFERENCE values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.data {
            ValueData::Text(s)
            | ValueData::String(s)
            | ValueData::Uri(s)
            | ValueData::CalAddress(s)
            | ValueData::Uid(s)
            | ValueData::Query(s)
            | ValueData::XmlReference(s) => Some(s),
            _ => None,
        }
    }

    /// The payload of DATE and DATE-TIME values.
    #[must_use]
    pub const fn as_date_time(&self) -> Option<DateTime> {
        match self.data {
            ValueData::Date(v) | ValueData::DateTime(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_date_time_period(&self) -> Option<DateTimePeriod> {
        match self.data {
            ValueData::DateTimePeriod(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_duration(&self) -> Option<Duration> {
        match self.data {
            ValueData::Duration(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_period(&self) -> Option<Period> {
        match self.data {
            ValueData::Period(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_trigger(&self) -> Option<Trigger> {
        match self.data {
            ValueData::Trigger(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        match &self.data {
            ValueData::Recur(rule) => Some(rule),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_geo(&self) -> Option<&Geo> {
        match &self.data {
            ValueData::Geo(geo) => Some(geo),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_request_status(&self) -> Option<&RequestStatus> {
        match &self.data {
            ValueData::RequestStatus(status) => Some(status),
            _ => None,
        }
    }

    /// The handle behind ATTACH and BINARY values.
    #[must_use]
    pub const fn as_attachment(&self) -> Option<&Attachment> {
        match &self.data {
            ValueData::Attach(a) | ValueData::Binary(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_token<T: PropertyToken>(&self) -> Option<T> {
        T::from_data(&self.data)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text().as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
