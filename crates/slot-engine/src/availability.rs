//! Common availability for a selection, ready for display.
//!
//! Composes [`common_slots`](crate::intersection::common_slots) and
//! [`consolidate`](crate::consolidate::consolidate) and keeps enough context
//! for the caller to tell "nobody selected" apart from "selected, but no
//! shared time".

use serde::{Deserialize, Serialize};

use crate::consolidate::{self, DateGroups};
use crate::index::AvailabilityIndex;
use crate::intersection;
use crate::record::SlotDuration;
use crate::selection::Selection;

/// Knobs for the availability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityOptions {
    /// Length of every slot in the data set.
    #[serde(rename = "slot_minutes")]
    pub slot: SlotDuration,
    /// Merge adjacent slots into longer blocks.
    #[serde(rename = "merge_slots")]
    pub merge: bool,
}

impl Default for AvailabilityOptions {
    fn default() -> Self {
        Self {
            slot: SlotDuration::default(),
            merge: true,
        }
    }
}

/// Which of the three outcomes a [`CommonAvailability`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// No roster member is selected.
    NoSelection,
    /// People are selected but they share no slot.
    NoOverlap,
    /// At least one shared slot exists.
    Found,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonAvailability {
    /// Selected roster members, in roster order.
    pub selected: Vec<String>,
    /// Number of qualifying slots before consolidation.
    pub slot_count: usize,
    /// Blocks grouped by calendar date.
    pub groups: DateGroups,
}

impl CommonAvailability {
    pub fn status(&self) -> AvailabilityStatus {
        if self.selected.is_empty() {
            AvailabilityStatus::NoSelection
        } else if self.slot_count == 0 {
            AvailabilityStatus::NoOverlap
        } else {
            AvailabilityStatus::Found
        }
    }

    pub fn block_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Find the time every selected person shares, grouped into date blocks.
pub fn find_common_availability(
    index: &AvailabilityIndex,
    selection: &Selection,
    options: AvailabilityOptions,
) -> CommonAvailability {
    let selected: Vec<String> = selection
        .resolve(index)
        .into_iter()
        .filter_map(|pos| index.person(pos).map(str::to_string))
        .collect();

    let slots = intersection::common_slots(index, selection);
    let groups = consolidate::consolidate(&slots, options.merge, options.slot);

    CommonAvailability {
        selected,
        slot_count: slots.len(),
        groups,
    }
}
