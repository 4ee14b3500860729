//! JSON journey input.
//!
//! Expects a top-level array of `{"timestamp", "fromZone", "toZone"}`
//! objects.

use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::Journey;

use super::record::JourneyRecord;
use super::{JourneyParser, locate};

/// Parses journeys from a JSON array.
///
/// # Example
///
/// ```
/// use fare_engine::input::{JourneyParser, JsonJourneyParser};
///
/// let input = r#"[
///     {"timestamp": "2025-11-03T10:20:00", "fromZone": 2, "toZone": 1},
///     {"timestamp": "2025-11-03T10:45:00", "fromZone": 1, "toZone": 1}
/// ]"#;
///
/// let journeys = JsonJourneyParser.parse(input).unwrap();
/// assert_eq!(journeys.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonJourneyParser;

impl JourneyParser for JsonJourneyParser {
    fn parse(&self, input: &str) -> EngineResult<Vec<Journey>> {
        let value: Value = serde_json::from_str(input).map_err(|e| EngineError::JourneyParse {
            location: "input".to_string(),
            message: format!("failed to parse JSON: {}", e),
        })?;

        let Value::Array(items) = value else {
            return Err(EngineError::JourneyParse {
                location: "input".to_string(),
                message: "input must be an array of journeys".to_string(),
            });
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let location = format!("index {}", index);
                let record: JourneyRecord =
                    serde_json::from_value(item).map_err(|e| EngineError::JourneyParse {
                        location: location.clone(),
                        message: e.to_string(),
                    })?;
                record.to_journey(&location).map_err(|e| locate(e, &location))
            })
            .collect()
    }
}
