//! Rendering of fare calculation results.
//!
//! Results can be rendered as a human-readable report, pretty-printed JSON
//! or CSV. Amounts are shown in pounds with two decimal places in the text
//! and CSV forms; JSON keeps the raw pence values.

mod delimited;
mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{FareCalculationResult, Pence};

/// Output formats for a [`FareCalculationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated rows with a trailing total.
    Csv,
}

impl OutputFormat {
    /// Renders a result in this format.
    ///
    /// # Example
    ///
    /// ```
    /// use fare_engine::models::FareCalculationResult;
    /// use fare_engine::output::OutputFormat;
    ///
    /// let report = OutputFormat::Text.render(&FareCalculationResult::empty()).unwrap();
    /// assert!(report.contains("No journeys found."));
    /// assert!(report.contains("TOTAL FARE: £0.00"));
    /// ```
    pub fn render(&self, result: &FareCalculationResult) -> EngineResult<String> {
        match self {
            OutputFormat::Text => Ok(text::render(result)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(result).map_err(|e| EngineError::OutputError {
                    message: e.to_string(),
                })
            }
            OutputFormat::Csv => delimited::render(result),
        }
    }
}

/// Formats pence as pounds with two decimals, e.g. `35` as `0.35`.
pub fn format_pounds(amount: Pence) -> String {
    format!("{}.{:02}", amount / 100, amount % 100)
}
