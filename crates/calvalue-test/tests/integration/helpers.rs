//! Shared helpers for the integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use calvalue_test::component::ical::{
    Attachment, ParentRef, PropertyKind, Value, ValueKind, parse_value,
};

/// Counts how many times attachment data has been released.
#[derive(Debug, Clone, Default)]
pub struct ReleaseSentinel {
    released: Arc<AtomicUsize>,
}

impl ReleaseSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline attachment whose release bumps this sentinel.
    pub fn attachment(&self, data: &[u8]) -> Attachment {
        let released = Arc::clone(&self.released);
        Attachment::from_data_with_release(data.to_vec(), move |_| {
            released.fetch_add(1, Ordering::SeqCst);
        })
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

/// Parses `text` as `kind`, panicking with the diagnostic on failure.
pub fn parse(kind: ValueKind, text: &str) -> Value {
    parse_value(kind, text).unwrap_or_else(|e| panic!("Failed to parse {text:?} as {kind}: {e}"))
}

/// Prints `value` as if held by a property of `property`.
pub fn print_under(property: PropertyKind, value: &Value) -> Option<String> {
    let mut linked = value.clone();
    linked.set_parent(Some(ParentRef::new(property)));
    linked.as_text()
}
