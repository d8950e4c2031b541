//! Property parameters (RFC 5545 §3.2).
//!
//! A [`Parameter`] is a named list of text values. Registered names resolve
//! to a [`ParameterKind`]; `X-` names and unregistered IANA names keep the
//! name as written.

use std::fmt;

use super::{Duration, ParentRef, ValueKind};
use crate::rfc::ical::build;
use crate::rfc::ical::parse::parse_duration;
use calvalue_core::constants::EXTENSION_PREFIX;

macro_rules! define_parameter_kinds {
    ($($variant:ident => $name:literal, $multi:literal;)+) => {
        /// Parameter names known to the codec (RFC 5545, RFC 7986, RFC 9073
        /// and RFC 9074).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ParameterKind {
            $($variant,)+
            /// Any `X-` parameter.
            X,
            /// A well-formed name outside the registry.
            Iana,
        }

        impl ParameterKind {
            /// Every registered parameter kind.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                    Self::X => "X",
                    Self::Iana => "IANA",
                }
            }

            /// Whether the parameter takes a comma-separated list of values.
            #[must_use]
            pub const fn is_multivalued(self) -> bool {
                match self {
                    $(Self::$variant => $multi,)+
                    Self::X | Self::Iana => false,
                }
            }
        }
    };
}

define_parameter_kinds! {
    AltRep => "ALTREP", false;
    Cn => "CN", false;
    CuType => "CUTYPE", false;
    DelegatedFrom => "DELEGATED-FROM", true;
    DelegatedTo => "DELEGATED-TO", true;
    Derived => "DERIVED", false;
    Dir => "DIR", false;
    Display => "DISPLAY", true;
    Email => "EMAIL", false;
    Encoding => "ENCODING", false;
    FbType => "FBTYPE", false;
    Feature => "FEATURE", true;
    FmtType => "FMTTYPE", false;
    Gap => "GAP", false;
    Label => "LABEL", false;
    Language => "LANGUAGE", false;
    LinkRel => "LINKREL", false;
    Member => "MEMBER", true;
    Order => "ORDER", false;
    PartStat => "PARTSTAT", false;
    Range => "RANGE", false;
    Related => "RELATED", false;
    RelType => "RELTYPE", false;
    Role => "ROLE", false;
    Rsvp => "RSVP", false;
    Schema => "SCHEMA", false;
    SentBy => "SENT-BY", false;
    TzId => "TZID", false;
    Value => "VALUE", false;
}

impl ParameterKind {
    /// Resolves a parameter name (case-insensitive).
    ///
    /// Registered names win, then `X-` names map to [`ParameterKind::X`];
    /// any other name made of letters, digits and `-` is
    /// [`ParameterKind::Iana`]. Empty or malformed names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return None;
        }
        if let Some(kind) = Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
        {
            return Some(kind);
        }
        let is_extension = name
            .get(..EXTENSION_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(EXTENSION_PREFIX));
        Some(if is_extension { Self::X } else { Self::Iana })
    }

    /// Whether the name is carried by the parameter rather than the kind.
    #[must_use]
    pub const fn is_named(self) -> bool {
        matches!(self, Self::X | Self::Iana)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property parameter: a name and one or more decoded text values.
#[derive(Debug)]
pub struct Parameter {
    kind: ParameterKind,
    name: String,
    values: Vec<String>,
    parent: Option<ParentRef>,
}

impl Clone for Parameter {
    /// The clone never has a parent.
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            values: self.values.clone(),
            parent: None,
        }
    }
}

impl Parameter {
    /// Creates a parameter without values. `X` and IANA parameters start
    /// without a name as well; see [`Parameter::set_xname`].
    #[must_use]
    pub fn new(kind: ParameterKind) -> Self {
        let name = if kind.is_named() {
            String::new()
        } else {
            kind.as_str().to_string()
        };
        Self {
            kind,
            name,
            values: Vec::new(),
            parent: None,
        }
    }

    /// Creates a registered parameter with a single value.
    #[must_use]
    pub fn with_value(kind: ParameterKind, value: impl Into<String>) -> Self {
        let mut param = Self::new(kind);
        param.set_xvalue(value);
        param
    }

    /// Creates a parameter from a name and a single value, resolving the
    /// kind from the name. Returns `None` for a malformed name.
    #[must_use]
    pub fn from_name(name: &str, value: impl Into<String>) -> Option<Self> {
        let kind = ParameterKind::from_name(name)?;
        let mut param = Self::with_value(kind, value);
        if kind.is_named() {
            param.name = name.to_string();
        }
        Some(param)
    }

    #[must_use]
    pub const fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Name as printed. Empty for an `X` or IANA parameter whose name was
    /// never set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replaces all values.
    pub fn set_values(&mut self, values: Vec<String>) {
        self.values = values;
    }

    /// Appends one value to a list parameter.
    pub fn push_value(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    #[must_use]
    pub const fn is_multivalued(&self) -> bool {
        self.kind.is_multivalued()
    }

    /// The name of an `X` or IANA parameter; `None` for registered kinds.
    #[must_use]
    pub fn xname(&self) -> Option<&str> {
        (self.kind.is_named() && !self.name.is_empty()).then_some(self.name.as_str())
    }

    /// Renames an `X` or IANA parameter. Registered kinds keep their name.
    pub fn set_xname(&mut self, name: impl Into<String>) {
        if self.kind.is_named() {
            self.name = name.into();
        } else {
            tracing::debug!(kind = %self.kind, "Ignoring rename of a registered parameter");
        }
    }

    /// First value.
    #[must_use]
    pub fn xvalue(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Replaces the values with a single one.
    pub fn set_xvalue(&mut self, value: impl Into<String>) {
        self.values = vec![value.into()];
    }

    #[must_use]
    pub fn iana_name(&self) -> Option<&str> {
        self.xname()
    }

    pub fn set_iana_name(&mut self, name: impl Into<String>) {
        self.set_xname(name);
    }

    #[must_use]
    pub fn iana_value(&self) -> Option<&str> {
        self.xvalue()
    }

    pub fn set_iana_value(&mut self, value: impl Into<String>) {
        self.set_xvalue(value);
    }

    /// Same kind, and for `X` and IANA parameters the same name ignoring
    /// ASCII case.
    #[must_use]
    pub fn has_same_name(&self, other: &Self) -> bool {
        self.kind == other.kind
            && (!self.kind.is_named() || self.name.eq_ignore_ascii_case(&other.name))
    }

    /// The value kind named by a `VALUE=` parameter.
    #[must_use]
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self.kind {
            ParameterKind::Value => self.xvalue().and_then(ValueKind::from_name),
            _ => None,
        }
    }

    /// The duration carried by a `GAP=` parameter.
    #[must_use]
    pub fn gap(&self) -> Option<Duration> {
        match self.kind {
            ParameterKind::Gap => self.xvalue().and_then(|v| parse_duration(v).ok()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn parent(&self) -> Option<ParentRef> {
        self.parent
    }

    pub const fn set_parent(&mut self, parent: Option<ParentRef>) {
        self.parent = parent;
    }

    /// Releases the parameter unless a property owns it, in which case it
    /// is handed back unchanged.
    #[must_use = "a parameter returned by free is still owned by its parent"]
    pub fn free(self) -> Option<Self> {
        if let Some(parent) = self.parent {
            tracing::trace!(
                parameter = %self.name,
                property = %parent.property_kind(),
                "Free suppressed for parented parameter"
            );
            return Some(self);
        }
        tracing::trace!(parameter = %self.name, "Freeing parameter");
        None
    }

    /// `NAME=value` text, or `None` when the name or the values are missing.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        build::print_parameter(self)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text().as_deref().unwrap_or_default())
    }
}
