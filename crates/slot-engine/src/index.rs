//! Normalizes a flat record list into roster and per-slot lookup structures.
//!
//! The index is built once per data load and is immutable afterwards. Duplicate
//! records for the same person and instant collapse into a single presence.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::record::AvailabilityRecord;

/// One distinct (person, slot) pair, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    /// Position of the person in the roster.
    pub person: usize,
    pub slot_start: DateTime<FixedOffset>,
}

/// Roster plus slot → people lookup built from availability records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityIndex {
    roster: Vec<String>,
    positions: HashMap<String, usize>,
    contacts: Vec<Option<String>>,
    presences: Vec<Presence>,
    by_slot: BTreeMap<DateTime<FixedOffset>, Vec<usize>>,
    by_person: Vec<Vec<DateTime<FixedOffset>>>,
    duplicates_dropped: usize,
}

impl AvailabilityIndex {
    /// Build an index from records in their input order.
    ///
    /// The roster keeps first-seen order. Slot keys compare as instants, so the
    /// same moment written with two different offsets is one slot.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = AvailabilityRecord>,
    {
        let mut index = Self::default();
        let mut seen: HashSet<(usize, DateTime<FixedOffset>)> = HashSet::new();

        for record in records {
            let person = index.intern(record.person, record.contact);
            if !seen.insert((person, record.slot_start)) {
                index.duplicates_dropped += 1;
                tracing::trace!(person, slot = %record.slot_start, "duplicate record dropped");
                continue;
            }

            index.by_slot.entry(record.slot_start).or_default().push(person);
            index.by_person[person].push(record.slot_start);
            index.presences.push(Presence {
                person,
                slot_start: record.slot_start,
            });
        }

        for slots in &mut index.by_person {
            slots.sort();
        }

        tracing::debug!(
            people = index.roster.len(),
            slots = index.by_slot.len(),
            presences = index.presences.len(),
            duplicates = index.duplicates_dropped,
            "availability index built"
        );

        index
    }

    fn intern(&mut self, person: String, contact: Option<String>) -> usize {
        if let Some(&pos) = self.positions.get(&person) {
            if self.contacts[pos].is_none() {
                self.contacts[pos] = contact;
            }
            return pos;
        }

        let pos = self.roster.len();
        self.positions.insert(person.clone(), pos);
        self.roster.push(person);
        self.contacts.push(contact);
        self.by_person.push(Vec::new());
        pos
    }

    /// Distinct people in first-seen order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn person_index(&self, person: &str) -> Option<usize> {
        self.positions.get(person).copied()
    }

    /// Name at a roster position.
    pub fn person(&self, index: usize) -> Option<&str> {
        self.roster.get(index).map(String::as_str)
    }

    /// First non-empty contact recorded for `person`.
    pub fn contact(&self, person: &str) -> Option<&str> {
        self.person_index(person)
            .and_then(|pos| self.contacts[pos].as_deref())
    }

    /// Roster positions present at `slot`, in first-seen order.
    pub fn people_at(&self, slot: &DateTime<FixedOffset>) -> &[usize] {
        self.by_slot.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names present at `slot`, in first-seen order.
    pub fn names_at<'a>(
        &'a self,
        slot: &DateTime<FixedOffset>,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.people_at(slot)
            .iter()
            .map(move |&pos| self.roster[pos].as_str())
    }

    /// Slots for one person, ascending. Unknown people have none.
    pub fn slots_for(&self, person: &str) -> &[DateTime<FixedOffset>] {
        self.person_index(person)
            .map(|pos| self.by_person[pos].as_slice())
            .unwrap_or(&[])
    }

    /// Every distinct slot with the roster positions present, ascending.
    pub fn slots(&self) -> impl Iterator<Item = (&DateTime<FixedOffset>, &[usize])> {
        self.by_slot.iter().map(|(slot, people)| (slot, people.as_slice()))
    }

    /// Distinct presences in input order.
    pub fn presences(&self) -> &[Presence] {
        &self.presences
    }

    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// Number of distinct presences.
    pub fn len(&self) -> usize {
        self.presences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presences.is_empty()
    }
}
