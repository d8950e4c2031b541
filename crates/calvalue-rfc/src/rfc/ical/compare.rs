//! Value comparison.
//!
//! Values of different kinds are never ordered, except that DATE and
//! DATE-TIME form one class.

use std::cmp::Ordering;
use std::fmt;

use super::core::{Attachment, Value, ValueData, ValueKind};

/// Outcome of [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    /// The values differ but have no order.
    NotEqual,
    /// No comparison is defined for the kind.
    Incomparable,
}

impl Comparison {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "LESS",
            Self::Equal => "EQUAL",
            Self::Greater => "GREATER",
            Self::NotEqual => "NOTEQUAL",
            Self::Incomparable => "INCOMPARABLE",
        }
    }

    #[must_use]
    pub const fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }

    const fn from_equality(equal: bool) -> Self {
        if equal { Self::Equal } else { Self::NotEqual }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn is_time(kind: ValueKind) -> bool {
    matches!(kind, ValueKind::Date | ValueKind::DateTime)
}

/// Compares two values.
///
/// Numeric kinds and DURATION are ordered by magnitude. Text-like and
/// structured kinds are ordered by their printed form, where a value that
/// prints nothing sorts first and two such values are equal. Booleans, tokens, BINARY and inline ATTACH
/// values are only tested for equality; attachments by identity, so two
/// separately created attachments with the same bytes are not equal.
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Comparison {
    let (kind_a, kind_b) = (a.kind(), b.kind());
    if kind_a != kind_b && !(is_time(kind_a) && is_time(kind_b)) {
        return Comparison::NotEqual;
    }

    match (a.data(), b.data()) {
        (ValueData::Attach(x), ValueData::Attach(y)) => match (x.url(), y.url()) {
            (Some(u), Some(v)) => Comparison::from_equality(u.eq_ignore_ascii_case(v)),
            _ => Comparison::from_equality(Attachment::ptr_eq(x, y)),
        },
        (ValueData::Binary(x), ValueData::Binary(y)) => {
            Comparison::from_equality(Attachment::ptr_eq(x, y))
        }
        (ValueData::Boolean(x), ValueData::Boolean(y)) => Comparison::from_equality(x == y),
        // NaN is neither less nor greater
        (ValueData::Float(x), ValueData::Float(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal).into()
        }
        (ValueData::Integer(x), ValueData::Integer(y)) => x.cmp(y).into(),
        (ValueData::UtcOffset(x), ValueData::UtcOffset(y)) => x.cmp(y).into(),
        (ValueData::Duration(x), ValueData::Duration(y)) => {
            x.as_seconds().cmp(&y.as_seconds()).into()
        }
        (ValueData::Period(_), ValueData::Period(_))
        | (ValueData::Geo(_), ValueData::Geo(_))
        | (ValueData::NoValue, ValueData::NoValue) => {
            tracing::warn!(kind = %kind_a, "Comparison is not defined for value kind");
            Comparison::Incomparable
        }
        _ if kind_a.is_token() => Comparison::from_equality(
            a.data().token_str() == b.data().token_str() && a.extension() == b.extension(),
        ),
        _ => compare_printed(a, b),
    }
}

/// Byte-wise comparison of the printed forms. Printing nothing sorts
/// before any text.
fn compare_printed(a: &Value, b: &Value) -> Comparison {
    a.as_text().cmp(&b.as_text()).into()
}
