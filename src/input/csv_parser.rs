//! CSV journey input.
//!
//! Rows are `timestamp,fromZone,toZone`. A header row is optional and is
//! recognised when the first row mentions `timestamp`, `from` or `to`.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{EngineError, EngineResult};
use crate::models::Journey;

use super::record::JourneyRecord;
use super::{JourneyParser, locate};

/// Parses journeys from comma-separated rows.
///
/// Line numbers in errors count data lines from 1, not counting the header.
/// Blank lines between rows are rejected as one-column rows.
///
/// # Example
///
/// ```
/// use fare_engine::input::{CsvJourneyParser, JourneyParser};
///
/// let input = "timestamp,fromZone,toZone\n2025-11-03T10:20:00,2,1\n2025-11-03T10:45:00,1,1\n";
/// let journeys = CsvJourneyParser.parse(input).unwrap();
/// assert_eq!(journeys.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvJourneyParser;

impl JourneyParser for CsvJourneyParser {
    fn parse(&self, input: &str) -> EngineResult<Vec<Journey>> {
        let mut lines = input.trim().lines().peekable();
        let Some(first) = lines.peek().copied() else {
            return Ok(Vec::new());
        };

        if is_header(&split_line(first, "line 1")?) {
            lines.next();
        }

        lines
            .enumerate()
            .map(|(index, line)| {
                let location = format!("line {}", index + 1);
                parse_row(&split_line(line, &location)?, &location)
            })
            .collect()
    }
}

/// Splits one line into trimmed fields. A blank line is a single empty field.
fn split_line(line: &str, location: &str) -> EngineResult<StringRecord> {
    let mut record = StringRecord::new();
    let read = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes())
        .read_record(&mut record)
        .map_err(|e| EngineError::JourneyParse {
            location: location.to_string(),
            message: e.to_string(),
        })?;

    if !read {
        record.push_field("");
    }
    Ok(record)
}

fn is_header(row: &StringRecord) -> bool {
    let lower = row.iter().collect::<Vec<_>>().join(",").to_lowercase();
    ["timestamp", "from", "to"]
        .iter()
        .any(|marker| lower.contains(marker))
}

fn parse_row(row: &StringRecord, location: &str) -> EngineResult<Journey> {
    if row.len() != 3 {
        return Err(EngineError::JourneyParse {
            location: location.to_string(),
            message: format!("expected 3 columns, got {}", row.len()),
        });
    }

    let zone = |value: &str| {
        value.parse::<i64>().map_err(|_| EngineError::JourneyParse {
            location: location.to_string(),
            message: format!("invalid zone number '{}'", value),
        })
    };

    let record = JourneyRecord {
        timestamp: row[0].to_string(),
        from_zone: zone(&row[1])?,
        to_zone: zone(&row[2])?,
    };

    record.to_journey(location).map_err(|e| locate(e, location))
}
