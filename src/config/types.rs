//! Configuration types for fare rules.
//!
//! This module contains the strongly-typed structures that make up a fare
//! rules file. They are deserialized from YAML by the loader and serialized
//! back out by the `/rules` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{Pence, ZonePair};

/// Peak and off-peak fares for one zone pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareConfig {
    /// The zone pair these fares apply to.
    pub zone_pair: ZonePair,
    /// The fare charged inside a peak window.
    pub peak_fare: Pence,
    /// The fare charged outside the peak windows.
    pub off_peak_fare: Pence,
}

/// Daily and weekly spending caps for one zone pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapConfig {
    /// The zone pair these caps apply to.
    pub zone_pair: ZonePair,
    /// The most a rider pays in one calendar day.
    pub daily_cap: Pence,
    /// The most a rider pays in one Monday–Sunday week.
    pub weekly_cap: Pence,
}

/// Fare rules file structure.
///
/// ```yaml
/// fares:
///   - zone_pair: "1-1"
///     peak_fare: 30
///     off_peak_fare: 25
/// caps:
///   - zone_pair: "1-1"
///     daily_cap: 100
///     weekly_cap: 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareRulesFile {
    /// The fare table.
    pub fares: Vec<FareConfig>,
    /// The cap table.
    pub caps: Vec<CapConfig>,
}
