//! Slots at which every selected person is available.

use chrono::{DateTime, FixedOffset};

use crate::index::AvailabilityIndex;
use crate::selection::Selection;

/// Find the slots at which every selected person has a record.
///
/// Only selected people are counted at each slot, so a slot qualifies exactly
/// when that count equals the number of selected roster members. Names not on
/// the roster are ignored. An empty selection (after ignoring unknown names)
/// yields no slots.
///
/// Returns slot starts in ascending chronological order.
pub fn common_slots(
    index: &AvailabilityIndex,
    selection: &Selection,
) -> Vec<DateTime<FixedOffset>> {
    let selected = selection.resolve(index);
    if selected.is_empty() {
        return Vec::new();
    }

    let mut mask = vec![false; index.roster().len()];
    for &pos in &selected {
        mask[pos] = true;
    }

    // Slots come out of the index already in instant order.
    let common: Vec<DateTime<FixedOffset>> = index
        .slots()
        .filter(|(_, people)| {
            people.iter().filter(|&&p| mask[p]).count() == selected.len()
        })
        .map(|(slot, _)| *slot)
        .collect();

    tracing::debug!(
        selected = selected.len(),
        common = common.len(),
        "common slots computed"
    );

    common
}
