//! iCalendar value parsing (RFC 5545 §3.3).
//!
//! ## Usage
//!
//! ```rust
//! use calvalue_rfc::rfc::ical::core::ValueKind;
//! use calvalue_rfc::rfc::ical::parse::parse_value;
//!
//! let value = parse_value(ValueKind::Duration, "PT15M").unwrap();
//! assert_eq!(value.as_text().as_deref(), Some("PT15M"));
//! ```
//!
//! ## Features
//!
//! - Basic and extended DATE / DATE-TIME forms
//! - Permissive INTEGER, FLOAT and UTC-OFFSET reads that do not depend on
//!   the host locale
//! - Unknown enumerated tokens kept as extension text
//! - `NAME=value` parameters with RFC 6868 caret decoding
//! - RRULE, REQUEST-STATUS, PERIOD and TRIGGER structures

mod error;
mod escape;
mod numeric;
mod parameter;
mod value;
mod values;

pub use error::{ErrorType, ParseError, ParseErrorKind, ParseResult};
pub use escape::{decode_text, dequote};
pub use numeric::{
    Numeral, float_prefix, format_f64, leading_f64, lenient_f64, lenient_i32, lenient_i64,
    saturate_i32,
};
pub use parameter::{decode_param_value, parse_parameter};
pub use value::{
    new_from_string, new_from_string_with_diagnostic, parse_token, parse_value, parse_value_named,
};
pub use values::{
    parse_boolean, parse_date, parse_date_time_period, parse_datetime, parse_duration, parse_geo,
    parse_period, parse_request_status, parse_rrule, parse_time, parse_trigger, parse_utc_offset,
};
