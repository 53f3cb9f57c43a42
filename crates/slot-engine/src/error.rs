//! Error types for slot-engine boundary constructors.
//!
//! The core operations (indexing, intersection, consolidation, matrix building)
//! are total over well-formed input and never return these. Only the
//! constructors that turn raw collaborator input into typed values can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Invalid slot duration: {0} minutes (expected 1..=1440)")]
    InvalidSlotDuration(i64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
