//! Tests for slot consolidation into per-date blocks.

use chrono::{DateTime, FixedOffset, NaiveDate};
use pretty_assertions::assert_eq;
use slot_engine::{consolidate, SlotDuration, TimeBlock};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn block(start: &str, end: &str, slot_count: u32) -> TimeBlock {
    TimeBlock {
        start: at(start),
        end: at(end),
        slot_count,
    }
}

fn half_hour() -> SlotDuration {
    SlotDuration::default()
}

// ── Merging ─────────────────────────────────────────────────────────────────

#[test]
fn single_slot_is_one_block() {
    let groups = consolidate(&[at("2026-03-16T09:00:00Z")], true, half_hour());

    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![block("2026-03-16T09:00:00Z", "2026-03-16T09:30:00Z", 1)]
    );
}

#[test]
fn adjacent_slots_merge() {
    let slots = [at("2026-03-16T09:00:00Z"), at("2026-03-16T09:30:00Z")];
    let groups = consolidate(&slots, true, half_hour());

    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![block("2026-03-16T09:00:00Z", "2026-03-16T10:00:00Z", 2)]
    );
}

#[test]
fn gap_splits_blocks() {
    let slots = [
        at("2026-03-16T09:00:00Z"),
        at("2026-03-16T09:30:00Z"),
        at("2026-03-16T10:30:00Z"),
        at("2026-03-16T11:00:00Z"),
        at("2026-03-16T11:30:00Z"),
    ];
    let groups = consolidate(&slots, true, half_hour());

    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![
            block("2026-03-16T09:00:00Z", "2026-03-16T10:00:00Z", 2),
            block("2026-03-16T10:30:00Z", "2026-03-16T12:00:00Z", 3),
        ]
    );
}

#[test]
fn overlapping_but_misaligned_slot_does_not_merge() {
    // 09:15 is inside the 09:00 slot, not at its end.
    let slots = [at("2026-03-16T09:00:00Z"), at("2026-03-16T09:15:00Z")];
    let groups = consolidate(&slots, true, half_hour());
    assert_eq!(groups[&date(2026, 3, 16)].len(), 2);
}

#[test]
fn unsorted_input_is_sorted_first() {
    let slots = [
        at("2026-03-16T10:00:00Z"),
        at("2026-03-16T09:00:00Z"),
        at("2026-03-16T09:30:00Z"),
    ];
    let groups = consolidate(&slots, true, half_hour());

    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![block("2026-03-16T09:00:00Z", "2026-03-16T10:30:00Z", 3)]
    );
}

#[test]
fn duplicate_slots_are_collapsed() {
    let slots = [
        at("2026-03-16T09:00:00Z"),
        at("2026-03-16T09:00:00Z"),
        at("2026-03-16T09:30:00Z"),
    ];
    let groups = consolidate(&slots, true, half_hour());
    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![block("2026-03-16T09:00:00Z", "2026-03-16T10:00:00Z", 2)]
    );
}

// ── Date grouping ───────────────────────────────────────────────────────────

#[test]
fn slots_on_different_dates_are_grouped_separately() {
    let slots = [
        at("2026-03-16T09:00:00Z"),
        at("2026-03-17T09:00:00Z"),
        at("2026-03-17T09:30:00Z"),
    ];
    let groups = consolidate(&slots, true, half_hour());

    let dates: Vec<NaiveDate> = groups.keys().copied().collect();
    assert_eq!(dates, vec![date(2026, 3, 16), date(2026, 3, 17)]);
    assert_eq!(groups[&date(2026, 3, 16)].len(), 1);
    assert_eq!(groups[&date(2026, 3, 17)][0].slot_count, 2);
}

#[test]
fn contiguous_run_across_midnight_is_split() {
    let slots = [at("2026-03-16T23:30:00Z"), at("2026-03-17T00:00:00Z")];
    let groups = consolidate(&slots, true, half_hour());

    assert_eq!(groups.len(), 2);
    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![block("2026-03-16T23:30:00Z", "2026-03-17T00:00:00Z", 1)]
    );
    assert_eq!(
        groups[&date(2026, 3, 17)],
        vec![block("2026-03-17T00:00:00Z", "2026-03-17T00:30:00Z", 1)]
    );
}

#[test]
fn date_comes_from_the_slot_offset() {
    // 01:00 on the 17th in +05:00 is still the 16th in UTC.
    let groups = consolidate(&[at("2026-03-17T01:00:00+05:00")], true, half_hour());
    assert!(groups.contains_key(&date(2026, 3, 17)));
    assert!(!groups.contains_key(&date(2026, 3, 16)));
}

// ── Merge toggle ────────────────────────────────────────────────────────────

#[test]
fn merge_off_keeps_one_block_per_slot() {
    let slots = [at("2026-03-16T09:00:00Z"), at("2026-03-16T09:30:00Z")];
    let groups = consolidate(&slots, false, half_hour());

    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![
            block("2026-03-16T09:00:00Z", "2026-03-16T09:30:00Z", 1),
            block("2026-03-16T09:30:00Z", "2026-03-16T10:00:00Z", 1),
        ]
    );
}

#[test]
fn custom_slot_duration_changes_adjacency() {
    let quarter = SlotDuration::new(15).unwrap();
    let slots = [at("2026-03-16T09:00:00Z"), at("2026-03-16T09:15:00Z")];
    let groups = consolidate(&slots, true, quarter);

    assert_eq!(
        groups[&date(2026, 3, 16)],
        vec![block("2026-03-16T09:00:00Z", "2026-03-16T09:30:00Z", 2)]
    );
}

// ── Degenerate input and block helpers ──────────────────────────────────────

#[test]
fn empty_input_yields_empty_mapping() {
    assert!(consolidate(&[], true, half_hour()).is_empty());
    assert!(consolidate(&[], false, half_hour()).is_empty());
}

#[test]
fn block_expands_back_to_its_slots() {
    let b = block("2026-03-16T09:00:00Z", "2026-03-16T10:30:00Z", 3);
    let starts: Vec<DateTime<FixedOffset>> = b.slot_starts(half_hour()).collect();
    assert_eq!(
        starts,
        vec![
            at("2026-03-16T09:00:00Z"),
            at("2026-03-16T09:30:00Z"),
            at("2026-03-16T10:00:00Z"),
        ]
    );
    assert_eq!(b.duration_minutes(), 90);
}
