//! # slot-engine
//!
//! Deterministic common-availability computation for group scheduling polls.
//!
//! Input is a flat list of records, one per (person, slot start). Every slot
//! has the same fixed length. The engine answers two questions: when is every
//! member of a chosen group free, as contiguous blocks per date; and who is
//! free at each (date, time-of-day) cell, for everyone at once.
//!
//! All operations are pure functions of their inputs. Nothing is cached or
//! mutated between calls.
//!
//! ## Modules
//!
//! - [`record`]: `AvailabilityRecord`, `SlotDuration`, timestamp parsing
//! - [`index`]: Roster and slot lookup built from records
//! - [`selection`]: The queried subset of the roster
//! - [`intersection`]: Slots shared by every selected person
//! - [`consolidate`]: Merge adjacent slots into per-date blocks
//! - [`availability`]: Intersection + consolidation in one call
//! - [`matrix`]: Date × time-of-day overlap grid
//! - [`error`]: Error types

pub mod availability;
pub mod consolidate;
pub mod error;
pub mod index;
pub mod intersection;
pub mod matrix;
pub mod record;
pub mod selection;

pub use availability::{
    find_common_availability, AvailabilityOptions, AvailabilityStatus, CommonAvailability,
};
pub use consolidate::{consolidate, DateGroups, TimeBlock};
pub use error::SlotError;
pub use index::AvailabilityIndex;
pub use intersection::common_slots;
pub use matrix::{build_matrix, OverlapCell, OverlapMatrix};
pub use record::{AvailabilityRecord, SlotDuration, DEFAULT_SLOT_MINUTES};
pub use selection::Selection;
