//! Typed value codec for RFC 5545 property values.
//!
//! - `rfc::ical::core`: the value model (kinds, payloads, ownership)
//! - `rfc::ical::parse`: text to value, including the escape and numeric engines
//! - `rfc::ical::build`: value to text
//! - `rfc::ical::compare`: ordering and equality between values

pub mod error;
pub mod rfc;
