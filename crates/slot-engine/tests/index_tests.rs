//! Tests for building the availability index.

use chrono::{DateTime, FixedOffset};
use slot_engine::{AvailabilityIndex, AvailabilityRecord};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn rec(person: &str, start: &str) -> AvailabilityRecord {
    AvailabilityRecord::new(person, None, at(start))
}

fn rec_with_contact(person: &str, contact: &str, start: &str) -> AvailabilityRecord {
    AvailabilityRecord::new(person, Some(contact.to_string()), at(start))
}

// ── Roster ──────────────────────────────────────────────────────────────────

#[test]
fn roster_keeps_first_seen_order() {
    let index = AvailabilityIndex::build(vec![
        rec("Zoe", "2026-03-16T09:00:00Z"),
        rec("Alice", "2026-03-16T09:00:00Z"),
        rec("Zoe", "2026-03-16T09:30:00Z"),
        rec("Mia", "2026-03-16T10:00:00Z"),
    ]);

    // Not alphabetical: order of first appearance.
    assert_eq!(index.roster(), ["Zoe", "Alice", "Mia"]);
    assert_eq!(index.person_index("Alice"), Some(1));
    assert_eq!(index.person_index("Nobody"), None);
    assert_eq!(index.person(2), Some("Mia"));
}

#[test]
fn empty_input_builds_empty_index() {
    let index = AvailabilityIndex::build(Vec::new());
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert!(index.roster().is_empty());
    assert_eq!(index.slots().count(), 0);
}

// ── Deduplication ───────────────────────────────────────────────────────────

#[test]
fn duplicate_records_are_one_presence() {
    let index = AvailabilityIndex::build(vec![
        rec("Alice", "2026-03-16T09:00:00Z"),
        rec("Alice", "2026-03-16T09:00:00Z"),
        rec("Bob", "2026-03-16T09:00:00Z"),
    ]);

    assert_eq!(index.len(), 2);
    assert_eq!(index.duplicates_dropped(), 1);
    assert_eq!(index.people_at(&at("2026-03-16T09:00:00Z")), [0, 1]);
}

#[test]
fn same_instant_in_another_offset_is_a_duplicate() {
    let index = AvailabilityIndex::build(vec![
        rec("Alice", "2026-03-16T14:00:00Z"),
        rec("Alice", "2026-03-16T09:00:00-05:00"),
    ]);

    assert_eq!(index.len(), 1);
    assert_eq!(index.duplicates_dropped(), 1);
    assert_eq!(index.slots().count(), 1);
}

// ── Lookups ─────────────────────────────────────────────────────────────────

#[test]
fn people_at_slot_in_first_seen_order() {
    let index = AvailabilityIndex::build(vec![
        rec("Alice", "2026-03-16T09:30:00Z"),
        rec("Bob", "2026-03-16T09:00:00Z"),
        rec("Alice", "2026-03-16T09:00:00Z"),
    ]);

    let names: Vec<&str> = index.names_at(&at("2026-03-16T09:00:00Z")).collect();
    assert_eq!(names, ["Bob", "Alice"]);
    assert!(index.people_at(&at("2026-03-16T12:00:00Z")).is_empty());
}

#[test]
fn slots_are_ascending_by_instant() {
    let index = AvailabilityIndex::build(vec![
        rec("Alice", "2026-03-16T10:00:00Z"),
        // 09:30 UTC written in a +01:00 offset.
        rec("Bob", "2026-03-16T10:30:00+01:00"),
        rec("Alice", "2026-03-16T09:00:00Z"),
    ]);

    let slots: Vec<DateTime<FixedOffset>> = index.slots().map(|(s, _)| *s).collect();
    assert_eq!(
        slots,
        vec![
            at("2026-03-16T09:00:00Z"),
            at("2026-03-16T09:30:00Z"),
            at("2026-03-16T10:00:00Z"),
        ]
    );
}

#[test]
fn slots_for_person_are_sorted() {
    let index = AvailabilityIndex::build(vec![
        rec("Alice", "2026-03-17T09:00:00Z"),
        rec("Alice", "2026-03-16T09:00:00Z"),
        rec("Bob", "2026-03-16T09:00:00Z"),
    ]);

    assert_eq!(
        index.slots_for("Alice"),
        [at("2026-03-16T09:00:00Z"), at("2026-03-17T09:00:00Z")]
    );
    assert!(index.slots_for("Nobody").is_empty());
}

#[test]
fn contact_is_first_non_empty_seen() {
    let index = AvailabilityIndex::build(vec![
        rec("Alice", "2026-03-16T09:00:00Z"),
        rec_with_contact("Alice", "alice@example.com", "2026-03-16T09:30:00Z"),
        rec_with_contact("Alice", "other@example.com", "2026-03-16T10:00:00Z"),
        rec("Bob", "2026-03-16T09:00:00Z"),
    ]);

    assert_eq!(index.contact("Alice"), Some("alice@example.com"));
    assert_eq!(index.contact("Bob"), None);
    assert_eq!(index.contact("Nobody"), None);
}

#[test]
fn presences_keep_input_order() {
    let index = AvailabilityIndex::build(vec![
        rec("Bob", "2026-03-16T10:00:00Z"),
        rec("Alice", "2026-03-16T09:00:00Z"),
    ]);

    let order: Vec<usize> = index.presences().iter().map(|p| p.person).collect();
    assert_eq!(order, [0, 1]);
    assert_eq!(index.presences()[0].slot_start, at("2026-03-16T10:00:00Z"));
}

#[test]
fn build_is_idempotent() {
    let records = vec![
        rec("Alice", "2026-03-16T09:00:00Z"),
        rec("Bob", "2026-03-16T09:00:00Z"),
        rec("Alice", "2026-03-16T09:00:00Z"),
    ];
    assert_eq!(
        AvailabilityIndex::build(records.clone()),
        AvailabilityIndex::build(records)
    );
}
