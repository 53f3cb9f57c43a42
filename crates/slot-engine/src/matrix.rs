//! Date × time-of-day overlap grid across the whole roster.
//!
//! The grid is the cross product of every calendar date and every time of day
//! seen in the data, so a time observed on any date becomes a row on all of
//! them. Cells never observed stay at `count == 0`. Dates and times are taken
//! in each presence's own offset, with times truncated to hour:minute.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::index::AvailabilityIndex;
use crate::selection::Selection;

/// Who is available at one (date, time-of-day) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapCell {
    pub count: usize,
    /// People present, in the order their presences were indexed.
    pub people: Vec<String>,
    /// Roster size, identical on every cell.
    pub total: usize,
}

impl OverlapCell {
    fn empty(total: usize) -> Self {
        Self {
            count: 0,
            people: Vec::new(),
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Everyone on the roster is present.
    pub fn is_full(&self) -> bool {
        self.total > 0 && self.count == self.total
    }

    /// People in this cell that are also in `visible`, order preserved.
    pub fn visible_people<'a>(
        &'a self,
        visible: &'a Selection,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.people
            .iter()
            .map(String::as_str)
            .filter(move |person| visible.contains(person))
    }
}

/// Dense overlap grid; look cells up with [`OverlapMatrix::cell`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMatrix {
    /// Distinct calendar dates, ascending.
    pub dates: Vec<NaiveDate>,
    /// Distinct times of day, ascending regardless of the date they came from.
    pub times_of_day: Vec<NaiveTime>,
    pub cells: BTreeMap<NaiveDate, BTreeMap<NaiveTime, OverlapCell>>,
}

impl OverlapMatrix {
    pub fn cell(&self, date: NaiveDate, time: NaiveTime) -> Option<&OverlapCell> {
        self.cells.get(&date).and_then(|row| row.get(&time))
    }

    /// Cells for one time of day, one per date in `dates` order.
    pub fn row(&self, time: NaiveTime) -> impl Iterator<Item = Option<&OverlapCell>> + '_ {
        self.dates.iter().map(move |date| self.cell(*date, time))
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Hour:minute of a slot start in its own offset.
pub fn time_of_day(slot: &DateTime<FixedOffset>) -> NaiveTime {
    let t = slot.time();
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// Build the overlap grid for every person in the index, ignoring any selection.
pub fn build_matrix(index: &AvailabilityIndex) -> OverlapMatrix {
    if index.is_empty() {
        return OverlapMatrix::default();
    }

    let keys: Vec<(NaiveDate, NaiveTime)> = index
        .presences()
        .iter()
        .map(|p| (p.slot_start.date_naive(), time_of_day(&p.slot_start)))
        .collect();

    let dates: BTreeSet<NaiveDate> = keys.iter().map(|(d, _)| *d).collect();
    let times: BTreeSet<NaiveTime> = keys.iter().map(|(_, t)| *t).collect();

    let total = index.roster().len();
    let mut cells: BTreeMap<NaiveDate, BTreeMap<NaiveTime, OverlapCell>> = dates
        .iter()
        .map(|date| {
            let row: BTreeMap<NaiveTime, OverlapCell> = times
                .iter()
                .map(|time| (*time, OverlapCell::empty(total)))
                .collect();
            (*date, row)
        })
        .collect();

    for (presence, (date, time)) in index.presences().iter().zip(&keys) {
        if let Some(cell) = cells.get_mut(date).and_then(|row| row.get_mut(time)) {
            cell.count += 1;
            if let Some(name) = index.person(presence.person) {
                cell.people.push(name.to_string());
            }
        }
    }

    tracing::debug!(
        dates = dates.len(),
        times = times.len(),
        people = total,
        "overlap matrix built"
    );

    OverlapMatrix {
        dates: dates.into_iter().collect(),
        times_of_day: times.into_iter().collect(),
        cells,
    }
}
