use thiserror::Error;

use crate::rfc::ical::parse::ParseError;

/// Value codec errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid value kind: {0}")]
    InvalidKind(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
