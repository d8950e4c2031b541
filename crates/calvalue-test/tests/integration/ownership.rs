//! Tests for clone independence, shared attachments and parent-owned values.

use calvalue_test::component::ical::{Property, PropertyKind, Value, ValueKind};

use super::helpers::*;

/// ## Summary
/// A clone never has a parent and owns its own text.
#[test_log::test]
fn clone_is_independent() {
    let mut summary = Property::new(PropertyKind::Summary);
    let _ = summary.set_value(parse(ValueKind::Text, "Team sync"));

    let original = summary.value().expect("value was set");
    let copy = original.clone();
    assert!(original.parent().is_some());
    assert!(copy.parent().is_none());

    assert!(copy.free().is_none());
    assert_eq!(summary.value_as_text().as_deref(), Some("Team sync"));
}

/// ## Summary
/// Clones share an attachment; its data outlives any single holder and is
/// released exactly once.
#[test_log::test]
fn shared_attachment_released_once() {
    let sentinel = ReleaseSentinel::new();
    let original = Value::binary(sentinel.attachment(b"payload"));
    let copy = original.clone();

    let attachment = copy.as_attachment().expect("binary value");
    assert_eq!(attachment.ref_count(), 2);

    assert!(original.free().is_none());
    assert_eq!(sentinel.released(), 0);
    assert_eq!(copy.as_text().as_deref(), Some("payload"));

    assert!(copy.free().is_none());
    assert_eq!(sentinel.released(), 1);
}

/// ## Summary
/// Freeing a value that a property still owns releases nothing.
#[test_log::test]
fn parent_suppresses_free() {
    let sentinel = ReleaseSentinel::new();
    let mut attach = Property::new(PropertyKind::Attach);
    let _ = attach.set_value(Value::attach(sentinel.attachment(b"inline")));

    let mut held = attach.take_value().expect("value was set");
    held.set_parent(Some(attach.parent_ref()));

    let held = held.free().expect("parented value is handed back");
    assert_eq!(sentinel.released(), 0);
    assert_eq!(held.as_text().as_deref(), Some("inline"));

    let _ = attach.set_value(held);
    drop(attach);
    assert_eq!(sentinel.released(), 1);
}

/// ## Summary
/// Replacing a property's value hands the old one back detached.
#[test_log::test]
fn replaced_value_is_detached() {
    let mut uid = Property::new(PropertyKind::Uid);
    let _ = uid.set_value(Value::uid("first"));
    let previous = uid.set_value(Value::uid("second")).expect("previous value");

    assert!(previous.parent().is_none());
    assert!(previous.free().is_none());
    assert_eq!(uid.value_as_text().as_deref(), Some("second"));
}

/// ## Summary
/// `new` rejects the sentinel kind and zero-fills every registered kind.
#[test_log::test]
fn new_covers_registered_kinds() {
    for kind in ValueKind::ALL {
        let value = Value::new(kind).unwrap_or_else(|e| panic!("{kind}: {e}"));
        assert_eq!(value.kind(), kind);
        assert!(value.parent().is_none());
        assert!(value.extension().is_none());
    }
    assert!(Value::new(ValueKind::NoValue).is_err());
}
