//! iCalendar value serialization (RFC 5545).
//!
//! This module provides:
//! - Escape: TEXT escaping and the standalone `encode_text` helper
//! - Printer: canonical text for every value kind
//! - Parameter: quoting and RFC 6868 caret encoding of parameter values

mod escape;
mod parameter;
mod printer;

pub use escape::{encode_text, quote};
pub use parameter::{encode_param_value, print_parameter};
pub use printer::{print, print_with};
