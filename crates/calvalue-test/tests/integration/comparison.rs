//! Tests for value comparison.

use calvalue_test::component::ical::{Comparison, ValueKind, compare};

use super::helpers::*;

/// ## Summary
/// DATE and DATE-TIME compare through their printed forms.
#[test_log::test]
fn date_and_date_time_coerce() {
    let date = parse(ValueKind::Date, "20260123");
    let same_day = parse(ValueKind::DateTime, "20260123T000000");
    let next_day = parse(ValueKind::Date, "20260124");

    assert_eq!(compare(&date, &same_day), Comparison::Less);
    assert_eq!(compare(&same_day, &next_day), Comparison::Less);
    assert_eq!(compare(&date, &date.clone()), Comparison::Equal);
}

/// ## Summary
/// Kinds outside the DATE/DATE-TIME class never order against each other.
#[test_log::test]
fn kind_mismatch_is_not_equal() {
    let text = parse(ValueKind::Text, "20260123");
    let date = parse(ValueKind::Date, "20260123");
    assert_eq!(compare(&text, &date), Comparison::NotEqual);
}

/// ## Summary
/// PERIOD and GEO have no order and say so.
#[test_log::test]
fn unordered_kinds() {
    let period = parse(ValueKind::Period, "20260123T090000Z/PT1H");
    assert_eq!(compare(&period, &period.clone()), Comparison::Incomparable);

    let geo = parse(ValueKind::Geo, "1.0;2.0");
    assert_eq!(compare(&geo, &geo.clone()), Comparison::Incomparable);
}

/// ## Summary
/// Durations compare by signed length, whatever their spelling.
#[test_log::test]
fn durations_by_length() {
    let week = parse(ValueKind::Duration, "P1W");
    let days = parse(ValueKind::Duration, "P7D");
    let back = parse(ValueKind::Duration, "-PT1S");
    assert_eq!(compare(&week, &days), Comparison::Equal);
    assert_eq!(compare(&back, &days), Comparison::Less);
}

/// ## Summary
/// Recurrence rules compare by printed text.
#[test_log::test]
fn recur_by_text() {
    let daily = parse(ValueKind::Recur, "FREQ=DAILY");
    let weekly = parse(ValueKind::Recur, "freq=weekly");
    assert_eq!(compare(&daily, &weekly), Comparison::Less);
    assert_eq!(compare(&weekly, &weekly.clone()), Comparison::Equal);
}
