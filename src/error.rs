//! Error types for the Fare Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing journeys, loading
//! fare rules, and calculating fares.

use thiserror::Error;

/// The main error type for the Fare Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use fare_engine::error::EngineError;
///
/// let error = EngineError::UnknownZonePair {
///     zone_pair: "3-3".to_string(),
///     table: "fare",
/// };
/// assert_eq!(error.to_string(), "No fare configuration found for zone pair: 3-3");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A journey referenced a zone outside the valid range.
    #[error("Invalid zone {zone}: zones must be between {min} and {max}")]
    InvalidZone {
        /// The zone value that was rejected.
        zone: i64,
        /// The lowest valid zone.
        min: u32,
        /// The highest valid zone.
        max: u32,
    },

    /// A fare or cap lookup found no entry for the zone pair.
    #[error("No {table} configuration found for zone pair: {zone_pair}")]
    UnknownZonePair {
        /// The zone pair that was looked up.
        zone_pair: String,
        /// Which rule table missed ("fare" or "cap").
        table: &'static str,
    },

    /// A zone pair string could not be parsed.
    #[error("Invalid zone pair '{value}': expected the form '<zone>-<zone>'")]
    InvalidZonePair {
        /// The text that failed to parse.
        value: String,
    },

    /// A raw journey record could not be turned into a journey.
    #[error("Invalid journey at {location}: {message}")]
    JourneyParse {
        /// Where the record sits in the input (e.g. "index 2", "line 4").
        location: String,
        /// A description of what was wrong with the record.
        message: String,
    },

    /// The input file extension is not a supported journey format.
    #[error("Unsupported file format: {extension}. Use .json or .csv")]
    UnsupportedFormat {
        /// The extension that was not recognised.
        extension: String,
    },

    /// The journey input file could not be read.
    #[error("Input file could not be read: {path}")]
    InputNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or was inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A result could not be rendered.
    #[error("Output error: {message}")]
    OutputError {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
