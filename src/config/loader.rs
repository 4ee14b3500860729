//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fare rules
//! from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::ZonePair;

use super::rules::FareRules;
use super::types::FareRulesFile;

/// Loads and validates fare rules from a YAML file.
///
/// # File Structure
///
/// ```text
/// config/
/// └── fares.yaml   # fares: [...] and caps: [...] keyed by zone pair
/// ```
///
/// # Example
///
/// ```no_run
/// use fare_engine::config::ConfigLoader;
/// use fare_engine::models::ZonePair;
///
/// let loader = ConfigLoader::load("./config/fares.yaml").unwrap();
/// let fare = loader.rules().get_fare(ZonePair::new(1, 2), true).unwrap();
/// println!("Peak 1-2 fare: {}", fare);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: FareRules,
}

impl ConfigLoader {
    /// Loads fare rules from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or a bad zone pair (`ConfigParseError`)
    /// - A zone pair appears twice in a table, or has a fare but no cap
    ///   (or a cap but no fare) (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rules = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            zone_pairs = rules.zone_pairs().len(),
            "Fare rules loaded"
        );

        Ok(Self { rules })
    }

    /// Parses and validates fare rules from YAML text.
    ///
    /// `origin` is only used to label errors.
    pub fn parse(content: &str, origin: &str) -> EngineResult<FareRules> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: origin.to_string(),
            message,
        };

        let file: FareRulesFile =
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let fare_pairs = unique_pairs(file.fares.iter().map(|f| f.zone_pair), "fares")
            .map_err(&parse_error)?;
        let cap_pairs =
            unique_pairs(file.caps.iter().map(|c| c.zone_pair), "caps").map_err(&parse_error)?;

        let mut missing_caps: Vec<&ZonePair> = fare_pairs.difference(&cap_pairs).collect();
        missing_caps.sort();
        if let Some(pair) = missing_caps.first() {
            return Err(parse_error(format!("zone pair {} has a fare but no cap", pair)));
        }

        let mut missing_fares: Vec<&ZonePair> = cap_pairs.difference(&fare_pairs).collect();
        missing_fares.sort();
        if let Some(pair) = missing_fares.first() {
            return Err(parse_error(format!("zone pair {} has a cap but no fare", pair)));
        }

        Ok(FareRules::from(file))
    }

    /// Returns the loaded fare rules.
    pub fn rules(&self) -> &FareRules {
        &self.rules
    }

    /// Consumes the loader, returning the fare rules.
    pub fn into_rules(self) -> FareRules {
        self.rules
    }
}

fn unique_pairs(
    pairs: impl Iterator<Item = ZonePair>,
    table: &str,
) -> Result<HashSet<ZonePair>, String> {
    let mut seen = HashSet::new();
    for pair in pairs {
        if !seen.insert(pair) {
            return Err(format!("zone pair {} appears more than once in {}", pair, table));
        }
    }
    Ok(seen)
}
