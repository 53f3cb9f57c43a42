//! Plain-text and JSON rendering of engine results.

use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;
use slot_engine::{
    AvailabilityIndex, AvailabilityStatus, CommonAvailability, OverlapMatrix, TimeBlock,
};

#[derive(Serialize)]
struct RosterEntry<'a> {
    person: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    contact: Option<&'a str>,
}

#[derive(Serialize)]
struct CommonAvailabilityJson<'a> {
    status: AvailabilityStatus,
    #[serde(flatten)]
    result: &'a CommonAvailability,
}

/// `"1h 30m"`, `"2h"`, or `"30m"`.
pub fn duration_label(minutes: i64) -> String {
    if minutes >= 60 {
        let (h, m) = (minutes / 60, minutes % 60);
        if m > 0 {
            format!("{}h {}m", h, m)
        } else {
            format!("{}h", h)
        }
    } else {
        format!("{}m", minutes)
    }
}

fn block_line(block: &TimeBlock) -> String {
    format!(
        "{} - {} {} ({})",
        block.start.format("%H:%M"),
        block.end.format("%H:%M"),
        block.end.format("%:z"),
        duration_label(block.duration_minutes())
    )
}

pub fn roster_text(index: &AvailabilityIndex) -> String {
    let mut out = String::new();
    for person in index.roster() {
        match index.contact(person) {
            Some(contact) => {
                let _ = writeln!(out, "{} <{}>", person, contact);
            }
            None => {
                let _ = writeln!(out, "{}", person);
            }
        }
    }
    out
}

pub fn roster_json(index: &AvailabilityIndex) -> Result<String> {
    let entries: Vec<RosterEntry<'_>> = index
        .roster()
        .iter()
        .map(|person| RosterEntry {
            person,
            contact: index.contact(person),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

pub fn common_text(result: &CommonAvailability) -> String {
    let mut out = String::new();
    match result.status() {
        AvailabilityStatus::NoSelection => {
            out.push_str("No participants selected.\n");
        }
        AvailabilityStatus::NoOverlap => {
            let _ = writeln!(
                out,
                "No common time found for {} selected participants.",
                result.selected.len()
            );
        }
        AvailabilityStatus::Found => {
            let _ = writeln!(
                out,
                "Common availability for {} ({} slots)",
                result.selected.join(", "),
                result.slot_count
            );
            for (date, blocks) in &result.groups {
                let _ = writeln!(out, "\n{}", date.format("%A, %b %-d, %Y"));
                for block in blocks {
                    let _ = writeln!(out, "  {}", block_line(block));
                }
            }
        }
    }
    out
}

pub fn common_json(result: &CommonAvailability) -> Result<String> {
    let json = CommonAvailabilityJson {
        status: result.status(),
        result,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Grid with one row per time of day and `count/total` per cell.
pub fn matrix_text(matrix: &OverlapMatrix) -> String {
    if matrix.is_empty() {
        return "No availability data.\n".to_string();
    }

    let mut out = String::new();
    let _ = write!(out, "{:<7}", "Time");
    for date in &matrix.dates {
        let _ = write!(out, " {:>10}", date.format("%a %b %-d").to_string());
    }
    out.push('\n');

    for time in &matrix.times_of_day {
        let _ = write!(out, "{:<7}", time.format("%H:%M").to_string());
        for cell in matrix.row(*time) {
            let label = match cell {
                Some(cell) if !cell.is_empty() => format!("{}/{}", cell.count, cell.total),
                _ => "-".to_string(),
            };
            let _ = write!(out, " {:>10}", label);
        }
        out.push('\n');
    }
    out
}

pub fn matrix_json(matrix: &OverlapMatrix) -> Result<String> {
    Ok(serde_json::to_string_pretty(matrix)?)
}
