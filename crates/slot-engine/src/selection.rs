//! The subset of the roster being queried, or shown.
//!
//! A `Selection` is plain data owned by the caller. Names outside the roster
//! are carried but ignored when the selection is resolved against an index.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::index::AvailabilityIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    /// Everyone on the roster.
    pub fn all(index: &AvailabilityIndex) -> Self {
        Self::from_names(index.roster().iter().cloned())
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add `name` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Roster positions of the selected people, in roster order.
    pub fn resolve(&self, index: &AvailabilityIndex) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .names
            .iter()
            .filter_map(|name| index.person_index(name))
            .collect();
        positions.sort_unstable();
        positions
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
