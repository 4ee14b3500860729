//! Request types for the Fare Calculation Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use serde::{Deserialize, Serialize};

use crate::input::JourneyRecord;
use crate::models::Journey;

use super::response::ApiErrorResponse;

/// Request body for the `/calculate` endpoint.
///
/// ```json
/// {"journeys": [{"timestamp": "2025-11-03T10:20:00", "fromZone": 2, "toZone": 1}]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The journeys to price, in any order.
    pub journeys: Vec<JourneyRecord>,
}

impl CalculationRequest {
    /// Validates every record and converts it into a journey.
    ///
    /// Fails on the first bad record; the error names its position as
    /// `journeys[N]`.
    pub fn to_journeys(&self) -> Result<Vec<Journey>, ApiErrorResponse> {
        self.journeys
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let location = format!("journeys[{}]", index);
                record
                    .to_journey(&location)
                    .map_err(|err| ApiErrorResponse::from(err).at(&location))
            })
            .collect()
    }
}
