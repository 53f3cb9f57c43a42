//! Merge adjacent slots into contiguous blocks, grouped by calendar date.
//!
//! Slots are partitioned by the local date of their own offset, sorted, then
//! swept left to right. A slot that starts exactly where the current block
//! ends extends it; anything else closes the block. Runs crossing midnight are
//! split because the two halves land in different date groups.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::record::SlotDuration;

/// A contiguous run of one or more slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Start of the first slot.
    pub start: DateTime<FixedOffset>,
    /// Exclusive end: start of the last slot plus one slot duration.
    pub end: DateTime<FixedOffset>,
    /// Number of slots merged into this block (at least 1).
    pub slot_count: u32,
}

impl TimeBlock {
    /// A block covering exactly one slot.
    pub fn single(start: DateTime<FixedOffset>, slot: SlotDuration) -> Self {
        Self {
            start,
            end: slot.end_of(start),
            slot_count: 1,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Expand back into the slot starts this block covers.
    pub fn slot_starts(
        &self,
        slot: SlotDuration,
    ) -> impl Iterator<Item = DateTime<FixedOffset>> {
        let start = self.start;
        (0..self.slot_count).map(move |i| start + slot.as_duration() * i as i32)
    }
}

/// Date-keyed blocks, each list in chronological order.
pub type DateGroups = BTreeMap<NaiveDate, Vec<TimeBlock>>;

/// Group slots by calendar date and, when `merge` is set, merge adjacent ones.
///
/// With `merge == false` every slot becomes its own single-slot block, so the
/// flag only changes how slots are drawn, never which slots are present.
/// Input order does not matter and duplicate instants are collapsed.
pub fn consolidate(
    slots: &[DateTime<FixedOffset>],
    merge: bool,
    slot: SlotDuration,
) -> DateGroups {
    let mut by_date: BTreeMap<NaiveDate, Vec<DateTime<FixedOffset>>> = BTreeMap::new();
    for start in slots {
        by_date.entry(start.date_naive()).or_default().push(*start);
    }

    let groups: DateGroups = by_date
        .into_iter()
        .map(|(date, mut starts)| {
            starts.sort();
            starts.dedup();
            let blocks = if merge {
                merge_adjacent(&starts, slot)
            } else {
                starts.iter().map(|s| TimeBlock::single(*s, slot)).collect()
            };
            (date, blocks)
        })
        .collect();

    tracing::debug!(
        slots = slots.len(),
        dates = groups.len(),
        blocks = groups.values().map(Vec::len).sum::<usize>(),
        merge,
        "slots consolidated"
    );

    groups
}

/// Greedy sweep over sorted, distinct slot starts.
fn merge_adjacent(starts: &[DateTime<FixedOffset>], slot: SlotDuration) -> Vec<TimeBlock> {
    let mut blocks: Vec<TimeBlock> = Vec::new();
    for &start in starts {
        if let Some(last) = blocks.last_mut() {
            if start == last.end {
                last.end = slot.end_of(last.end);
                last.slot_count += 1;
                continue;
            }
        }
        blocks.push(TimeBlock::single(start, slot));
    }
    blocks
}
