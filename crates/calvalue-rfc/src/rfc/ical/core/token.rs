//! Enumerated property tokens (METHOD, STATUS, TRANSP, ...).
//!
//! Every enumeration carries two extra members: `X`, stored together with
//! the literal when a token is not recognised, and `None`.

use std::fmt;

use super::{PropertyKind, ValueData, ValueKind};

/// Common interface of the enumerated-token types.
pub trait PropertyToken: Copy + Eq + fmt::Debug + Sized + 'static {
    /// The property whose enumeration this type is.
    const PROPERTY: PropertyKind;
    /// The value kind carrying this token.
    const VALUE_KIND: ValueKind;
    /// Member stored when the literal is not a known token.
    const EXTENSION: Self;

    /// Looks up a token by its spelling (case-insensitive).
    fn from_token(token: &str) -> Option<Self>;

    /// Returns whether this member is a real token of `property`'s
    /// enumeration. The `X` and `None` members never are.
    fn belongs_to(self, property: PropertyKind) -> bool;

    /// Canonical spelling.
    fn as_str(self) -> &'static str;

    /// Wraps the token into a value payload.
    fn into_data(self) -> ValueData;

    /// Extracts the token from a payload of the matching kind.
    fn from_data(data: &ValueData) -> Option<Self>;
}

macro_rules! define_token_enum {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident for $property:ident {
            $($variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ty {
            $($variant,)+
            X,
            None,
        }

        impl $ty {
            const ALL: &'static [Self] = &[$(Self::$variant,)+ Self::X, Self::None];
        }

        impl PropertyToken for $ty {
            const PROPERTY: PropertyKind = PropertyKind::$property;
            const VALUE_KIND: ValueKind = ValueKind::$ty;
            const EXTENSION: Self = Self::X;

            fn from_token(token: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.as_str().eq_ignore_ascii_case(token))
            }

            fn belongs_to(self, property: PropertyKind) -> bool {
                property == Self::PROPERTY && !matches!(self, Self::X | Self::None)
            }

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                    Self::X => "X",
                    Self::None => "NONE",
                }
            }

            fn into_data(self) -> ValueData {
                ValueData::$ty(self)
            }

            fn from_data(data: &ValueData) -> Option<Self> {
                match data {
                    ValueData::$ty(token) => Some(*token),
                    _ => None,
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_token_enum! {
    /// ACTION (RFC 5545 §3.8.6.1).
    pub enum Action for Action {
        Audio => "AUDIO",
        Display => "DISPLAY",
        Email => "EMAIL",
        Procedure => "PROCEDURE",
    }
}

define_token_enum! {
    /// BUSYTYPE (RFC 7953 §3.2).
    pub enum BusyType for BusyType {
        Busy => "BUSY",
        BusyUnavailable => "BUSY-UNAVAILABLE",
        BusyTentative => "BUSY-TENTATIVE",
    }
}

define_token_enum! {
    pub enum CarLevel for CarLevel {
        CarNone => "CAR-NONE",
        CarMin => "CAR-MIN",
        CarFull1 => "CAR-FULL-1",
    }
}

define_token_enum! {
    /// CLASS (RFC 5545 §3.8.1.3).
    pub enum Class for Class {
        Public => "PUBLIC",
        Private => "PRIVATE",
        Confidential => "CONFIDENTIAL",
    }
}

define_token_enum! {
    pub enum Cmd for Cmd {
        Abort => "ABORT",
        Continue => "CONTINUE",
        Create => "CREATE",
        Delete => "DELETE",
        GenerateUid => "GENERATE-UID",
        GetCapability => "GET-CAPABILITY",
        Identify => "IDENTIFY",
        Modify => "MODIFY",
        Move => "MOVE",
        Reply => "REPLY",
        Search => "SEARCH",
        SetLocale => "SET-LOCALE",
    }
}

define_token_enum! {
    /// METHOD (RFC 5545 §3.7.2, RFC 5546 §1.4).
    pub enum Method for Method {
        Publish => "PUBLISH",
        Request => "REQUEST",
        Reply => "REPLY",
        Add => "ADD",
        Cancel => "CANCEL",
        Refresh => "REFRESH",
        Counter => "COUNTER",
        DeclineCounter => "DECLINECOUNTER",
        Create => "CREATE",
        Read => "READ",
        Response => "RESPONSE",
        Move => "MOVE",
        Modify => "MODIFY",
        GenerateUid => "GENERATEUID",
        Delete => "DELETE",
        PollStatus => "POLLSTATUS",
    }
}

define_token_enum! {
    pub enum PollCompletion for PollCompletion {
        Server => "SERVER",
        ServerSubmit => "SERVER-SUBMIT",
        ServerChoice => "SERVER-CHOICE",
        Client => "CLIENT",
    }
}

define_token_enum! {
    pub enum PollMode for PollMode {
        Basic => "BASIC",
    }
}

define_token_enum! {
    /// PROXIMITY (RFC 9074 §8.1).
    pub enum Proximity for Proximity {
        Arrive => "ARRIVE",
        Depart => "DEPART",
        Connect => "CONNECT",
        Disconnect => "DISCONNECT",
    }
}

define_token_enum! {
    pub enum QueryLevel for QueryLevel {
        CalQl1 => "CAL-QL-1",
        CalQlNone => "CAL-QL-NONE",
    }
}

define_token_enum! {
    /// STATUS (RFC 5545 §3.8.1.11, plus the VPOLL and task extensions).
    pub enum Status for Status {
        Tentative => "TENTATIVE",
        Confirmed => "CONFIRMED",
        Completed => "COMPLETED",
        NeedsAction => "NEEDS-ACTION",
        Cancelled => "CANCELLED",
        InProcess => "IN-PROCESS",
        Draft => "DRAFT",
        Final => "FINAL",
        Submitted => "SUBMITTED",
        Pending => "PENDING",
        Failed => "FAILED",
        Deleted => "DELETED",
    }
}

define_token_enum! {
    /// TRANSP (RFC 5545 §3.8.2.7).
    pub enum Transp for Transp {
        Opaque => "OPAQUE",
        OpaqueNoConflict => "OPAQUE-NOCONFLICT",
        Transparent => "TRANSPARENT",
        TransparentNoConflict => "TRANSPARENT-NOCONFLICT",
    }
}

define_token_enum! {
    /// PARTICIPANT-TYPE (RFC 9073 §6.2).
    pub enum ParticipantType for ParticipantType {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Sponsor => "SPONSOR",
        Contact => "CONTACT",
        BookingContact => "BOOKING-CONTACT",
        EmergencyContact => "EMERGENCY-CONTACT",
        PublicityContact => "PUBLICITY-CONTACT",
        PlannerContact => "PLANNER-CONTACT",
        Performer => "PERFORMER",
        Speaker => "SPEAKER",
    }
}

define_token_enum! {
    /// RESOURCE-TYPE (RFC 9073 §6.3).
    pub enum ResourceType for ResourceType {
        Room => "ROOM",
        Projector => "PROJECTOR",
        RemoteConferenceAudio => "REMOTE-CONFERENCE-AUDIO",
        RemoteConferenceVideo => "REMOTE-CONFERENCE-VIDEO",
    }
}
