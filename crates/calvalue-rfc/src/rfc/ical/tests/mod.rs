//! Cross-module tests for the value codec.

mod round_trip;
