//! Shared foundations for the calvalue workspace: errors, configuration and
//! constants used by the value codec.

pub mod config;
pub mod constants;
pub mod error;
