//! Calvalue value codec - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `calvalue_test::` paths.

pub mod component {
    // Value model, parser, printer and comparator
    pub mod ical {
        pub use calvalue_rfc::rfc::ical::*;
    }

    pub mod config {
        pub use calvalue_core::config::*;
    }

    pub mod error {
        pub use calvalue_core::error::*;
        pub use calvalue_rfc::error::*;
    }
}

pub use calvalue_rfc as rfc;
