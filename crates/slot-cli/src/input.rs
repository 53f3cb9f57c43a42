//! Reading poll exports into availability records.
//!
//! The export is a comma-separated file with a header row and the columns
//! `name,email,time`. Fields are not quoted. Extra trailing columns are ignored.

use std::fmt;

use slot_engine::AvailabilityRecord;

/// A data row that could not be turned into a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    /// 1-based line number in the input.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

#[derive(Debug, Default)]
pub struct ParsedInput {
    pub records: Vec<AvailabilityRecord>,
    pub skipped: Vec<RowError>,
}

/// Parse CSV text, skipping the header row and blank lines.
pub fn parse_csv(text: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for (i, line) in text.lines().enumerate().skip(1) {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let name = fields.next().unwrap_or("");
        let email = fields.next().unwrap_or("");
        let Some(time) = fields.next() else {
            let err = RowError {
                line: line_no,
                message: "expected 3 columns (name,email,time)".to_string(),
            };
            tracing::warn!(%err, "skipping row");
            parsed.skipped.push(err);
            continue;
        };

        match AvailabilityRecord::parse(name, email, time) {
            Ok(record) => parsed.records.push(record),
            Err(e) => {
                let err = RowError {
                    line: line_no,
                    message: e.to_string(),
                };
                tracing::warn!(%err, "skipping row");
                parsed.skipped.push(err);
            }
        }
    }

    tracing::debug!(
        records = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "input parsed"
    );

    parsed
}
