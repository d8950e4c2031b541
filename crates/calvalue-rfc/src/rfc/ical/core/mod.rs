//! The iCalendar value model (RFC 5545 §3.3).
//!
//! [`Value`] is a kind-tagged payload: exactly one [`ValueData`] variant per
//! [`ValueKind`]. The remaining types are the payloads themselves and the
//! property-side types a value refers to.

mod attach;
mod datetime;
mod duration;
mod geo;
mod kind;
mod parameter;
mod period;
mod property;
mod reqstat;
mod rrule;
mod token;
mod value;

pub use attach::{Attachment, ReleaseFn};
pub use datetime::{Date, DateTime, Time, UtcOffset};
pub use duration::Duration;
pub use geo::{GEO_COORD_MAX_LEN, Geo, GeoCoord};
pub use kind::ValueKind;
pub use parameter::{Parameter, ParameterKind};
pub use period::{DateTimePeriod, Period, Trigger};
pub use property::{ParentRef, Property, PropertyKind};
pub use reqstat::{RequestStatus, StatusCode};
pub use rrule::{Frequency, RRule, Weekday, WeekdayNum};
pub use token::{
    Action, BusyType, CarLevel, Class, Cmd, Method, ParticipantType, PollCompletion, PollMode,
    PropertyToken, Proximity, QueryLevel, ResourceType, Status, Transp,
};
pub use value::{Value, ValueData};
