//! iCalendar property values (RFC 5545 §3.3).
//!
//! This module provides the typed value model, parsing and printing of
//! value text, and value comparison.
//!
//! ## Overview
//!
//! A [`Value`] is one of the value kinds listed in [`ValueKind`]. Text is
//! turned into a value with [`parse_value`], which needs the kind up front
//! (as given by a property's default or its `VALUE=` parameter), and back
//! into text with [`Value::as_text`].
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use calvalue_rfc::rfc::ical::{ValueKind, parse_value};
//!
//! let value = parse_value(ValueKind::Text, "Meeting\\, room 4").unwrap();
//! assert_eq!(value.as_str(), Some("Meeting, room 4"));
//! assert_eq!(value.as_text().as_deref(), Some("Meeting\\, room 4"));
//! ```
//!
//! ### Ownership
//!
//! ```rust
//! use calvalue_rfc::rfc::ical::{Property, PropertyKind, Value};
//!
//! let mut categories = Property::new(PropertyKind::Categories);
//! let _ = categories.set_value(Value::text("WORK,TRAVEL"));
//! assert_eq!(categories.value_as_text().as_deref(), Some("WORK,TRAVEL"));
//!
//! // Taking the value out detaches it, so it can be freed.
//! let value = categories.take_value().unwrap();
//! assert!(value.parent().is_none());
//! assert!(value.free().is_none());
//! ```
//!
//! ### Parameters
//!
//! ```rust
//! use calvalue_rfc::rfc::ical::{ParameterKind, parse_parameter};
//!
//! let param = parse_parameter("CN=\"Jane ^'JD^' Doe\"").unwrap();
//! assert_eq!(param.kind(), ParameterKind::Cn);
//! assert_eq!(param.xvalue(), Some("Jane \"JD\" Doe"));
//! assert_eq!(param.as_text().as_deref(), Some("CN=Jane ^'JD^' Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - The value model and the types it carries
//! - [`parse`] - Text to value, plus the escape and numeric engines
//! - [`build`] - Value to text
//! - [`compare`] - Ordering and equality of values

pub mod build;
pub mod compare;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{encode_text, print, print_parameter, print_with};
pub use compare::{Comparison, compare};
pub use core::{
    Attachment, DateTime, Parameter, ParameterKind, ParentRef, Property, PropertyKind,
    PropertyToken, Value, ValueData, ValueKind,
};
pub use parse::{
    ParseError, ParseErrorKind, ParseResult, decode_text, new_from_string,
    new_from_string_with_diagnostic, parse_parameter, parse_value, parse_value_named,
};
