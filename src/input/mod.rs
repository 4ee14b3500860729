//! Journey input adapters.
//!
//! This module turns JSON and CSV journey files into validated [`Journey`]
//! values. The format is picked from the file extension.
//!
//! # Example
//!
//! ```no_run
//! use fare_engine::input::load_journeys;
//!
//! let journeys = load_journeys("journeys.csv").unwrap();
//! println!("Loaded {} journeys", journeys.len());
//! ```

mod csv_parser;
mod json_parser;
mod record;

use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Journey;

pub use csv_parser::CsvJourneyParser;
pub use json_parser::JsonJourneyParser;
pub use record::{JourneyRecord, parse_timestamp};

/// Turns raw input text into journeys.
pub trait JourneyParser {
    /// Parses every journey in `input`, failing on the first bad record.
    fn parse(&self, input: &str) -> EngineResult<Vec<Journey>>;
}

/// Supported journey file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A JSON array of journey objects.
    Json,
    /// Comma-separated `timestamp,fromZone,toZone` rows.
    Csv,
}

impl InputFormat {
    /// Picks the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedFormat`] for anything other than
    /// `.json` or `.csv`.
    ///
    /// # Example
    ///
    /// ```
    /// use fare_engine::input::InputFormat;
    ///
    /// assert_eq!(InputFormat::from_path("trips.JSON").unwrap(), InputFormat::Json);
    /// assert!(InputFormat::from_path("trips.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(InputFormat::Json),
            "csv" => Ok(InputFormat::Csv),
            other => Err(EngineError::UnsupportedFormat {
                extension: format!(".{}", other),
            }),
        }
    }

    /// Parses `input` with the parser for this format.
    pub fn parse(&self, input: &str) -> EngineResult<Vec<Journey>> {
        match self {
            InputFormat::Json => JsonJourneyParser.parse(input),
            InputFormat::Csv => CsvJourneyParser.parse(input),
        }
    }
}

/// Reads and parses a journey file, choosing the parser by extension.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedFormat`] for an unknown extension,
/// [`EngineError::InputNotFound`] if the file cannot be read, or the
/// parser's error for bad content.
pub fn load_journeys(path: impl AsRef<Path>) -> EngineResult<Vec<Journey>> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|_| EngineError::InputNotFound {
        path: path.display().to_string(),
    })?;

    format.parse(&content)
}

/// Attaches an input location to a zone validation failure.
fn locate(error: EngineError, location: &str) -> EngineError {
    if matches!(error, EngineError::InvalidZone { .. }) {
        EngineError::JourneyParse {
            location: location.to_string(),
            message: error.to_string(),
        }
    } else {
        error
    }
}
