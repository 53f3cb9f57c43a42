//! WASM bindings for slot-engine.
//!
//! Exposes the roster, the common-availability query, and the overlap matrix to
//! JavaScript via `wasm-bindgen`. Records and results cross the boundary as
//! JSON strings. Every call rebuilds the index from the records it is given, so
//! the host decides when to recompute.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::{Deserialize, Serialize};
use slot_engine::{
    AvailabilityIndex, AvailabilityOptions, AvailabilityRecord, AvailabilityStatus, Selection,
    SlotDuration,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for records passed from JavaScript.
#[derive(Deserialize)]
struct RecordInput {
    person: String,
    #[serde(default)]
    contact: Option<String>,
    slot_start: String,
}

#[derive(Serialize)]
struct RosterEntryDto<'a> {
    person: &'a str,
    contact: Option<&'a str>,
}

#[derive(Serialize)]
struct CommonAvailabilityDto<'a> {
    status: AvailabilityStatus,
    #[serde(flatten)]
    result: &'a slot_engine::CommonAvailability,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

/// Parse a JSON array of `{person, contact?, slot_start}` objects into an index.
fn index_from_json(json: &str) -> Result<AvailabilityIndex, JsValue> {
    let inputs: Vec<RecordInput> =
        serde_json::from_str(json).map_err(|e| js_err("Invalid records JSON", e))?;

    let records = inputs
        .into_iter()
        .map(|input| {
            AvailabilityRecord::parse(
                &input.person,
                input.contact.as_deref().unwrap_or(""),
                &input.slot_start,
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))
        })
        .collect::<Result<Vec<_>, JsValue>>()?;

    Ok(AvailabilityIndex::build(records))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_err("Serialization error", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Distinct people in first-seen order.
///
/// Returns a JSON array of `{person, contact}` objects.
#[wasm_bindgen]
pub fn roster(records_json: &str) -> Result<String, JsValue> {
    let index = index_from_json(records_json)?;
    let entries: Vec<RosterEntryDto<'_>> = index
        .roster()
        .iter()
        .map(|person| RosterEntryDto {
            person,
            contact: index.contact(person),
        })
        .collect();
    to_json(&entries)
}

/// Time shared by every selected person, grouped by date into blocks.
///
/// `selected_json` is a JSON array of names. `slot_minutes` defaults to 30.
/// Returns `{status, selected, slot_count, groups}` where `status` is one of
/// `no_selection`, `no_overlap`, or `found`.
#[wasm_bindgen(js_name = "commonAvailability")]
pub fn common_availability(
    records_json: &str,
    selected_json: &str,
    merge: bool,
    slot_minutes: Option<u32>,
) -> Result<String, JsValue> {
    let index = index_from_json(records_json)?;
    let names: Vec<String> =
        serde_json::from_str(selected_json).map_err(|e| js_err("Invalid selection JSON", e))?;

    let slot = match slot_minutes {
        Some(minutes) => {
            SlotDuration::new(i64::from(minutes)).map_err(|e| JsValue::from_str(&e.to_string()))?
        }
        None => SlotDuration::default(),
    };

    let result = slot_engine::find_common_availability(
        &index,
        &Selection::from_names(names),
        AvailabilityOptions { slot, merge },
    );

    to_json(&CommonAvailabilityDto {
        status: result.status(),
        result: &result,
    })
}

/// Date × time-of-day grid for everyone in the records.
///
/// Returns `{dates, times_of_day, cells}`; look up `cells[date][time]` for
/// `{count, people, total}`.
#[wasm_bindgen(js_name = "overlapMatrix")]
pub fn overlap_matrix(records_json: &str) -> Result<String, JsValue> {
    let index = index_from_json(records_json)?;
    to_json(&slot_engine::build_matrix(&index))
}
