//! End-to-end tests for the value codec public API.

mod comparison;
mod helpers;
mod ownership;
mod parameters;
mod parsing;
mod printing;
