//! Availability records and the fixed slot granularity they share.
//!
//! A record says "this person is available for one slot starting at this
//! instant". The slot length is never stored per record; it is a single
//! [`SlotDuration`] shared by every record in a data set.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Length of one availability slot when nothing else is configured.
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

/// Upper bound for a slot: one full day.
const MAX_SLOT_MINUTES: i64 = 24 * 60;

/// Naive layouts accepted by [`AvailabilityRecord::parse`], read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The fixed length of every slot, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SlotDuration(i64);

impl SlotDuration {
    /// Build a slot duration, rejecting anything outside `1..=1440` minutes.
    pub fn new(minutes: i64) -> Result<Self> {
        if (1..=MAX_SLOT_MINUTES).contains(&minutes) {
            Ok(Self(minutes))
        } else {
            Err(SlotError::InvalidSlotDuration(minutes))
        }
    }

    pub fn minutes(self) -> i64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::minutes(self.0)
    }

    /// Exclusive end of the slot that starts at `start`.
    pub fn end_of(self, start: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        start + self.as_duration()
    }
}

impl Default for SlotDuration {
    fn default() -> Self {
        Self(DEFAULT_SLOT_MINUTES)
    }
}

impl TryFrom<i64> for SlotDuration {
    type Error = SlotError;

    fn try_from(minutes: i64) -> Result<Self> {
        Self::new(minutes)
    }
}

impl From<SlotDuration> for i64 {
    fn from(slot: SlotDuration) -> Self {
        slot.0
    }
}

/// One row of input: a person available for the slot starting at `slot_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Display name; the grouping key for the roster.
    pub person: String,
    /// Optional contact string (usually an email), carried through for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Start of the slot, with the offset it was recorded in.
    pub slot_start: DateTime<FixedOffset>,
}

impl AvailabilityRecord {
    pub fn new(
        person: impl Into<String>,
        contact: Option<String>,
        slot_start: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            person: person.into(),
            contact,
            slot_start,
        }
    }

    /// Build a record from raw text fields.
    ///
    /// All fields are trimmed. An empty `contact` becomes `None`. The timestamp
    /// is accepted as RFC 3339, as `YYYY-MM-DD HH:MM:SS±HH:MM`, or as a naive
    /// `YYYY-MM-DD[T ]HH:MM[:SS]` which is read at offset `+00:00`.
    ///
    /// # Errors
    /// Returns `SlotError::MissingField` if `person` or `slot_start` is blank and
    /// `SlotError::InvalidTimestamp` if the timestamp matches none of the layouts.
    pub fn parse(person: &str, contact: &str, slot_start: &str) -> Result<Self> {
        let person = person.trim();
        if person.is_empty() {
            return Err(SlotError::MissingField("person"));
        }

        let slot_start = slot_start.trim();
        if slot_start.is_empty() {
            return Err(SlotError::MissingField("slot_start"));
        }

        let contact = contact.trim();
        let contact = (!contact.is_empty()).then(|| contact.to_string());

        Ok(Self {
            person: person.to_string(),
            contact,
            slot_start: parse_timestamp(slot_start)?,
        })
    }
}

/// Parse a timestamp string into an offset-carrying instant.
///
/// See [`AvailabilityRecord::parse`] for the accepted layouts.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
        return Ok(dt);
    }

    let mut last_err = None;
    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(s, format) {
            Ok(ndt) => return Ok(ndt.and_utc().fixed_offset()),
            Err(e) => last_err = Some(e),
        }
    }

    Err(SlotError::InvalidTimestamp {
        value: s.to_string(),
        reason: last_err
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unrecognized layout".to_string()),
    })
}

