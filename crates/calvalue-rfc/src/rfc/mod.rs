//! RFC-defined formats.

pub mod ical;
