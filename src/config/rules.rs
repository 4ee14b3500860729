//! Fare rule tables.
//!
//! [`FareRules`] is the immutable lookup table the engine prices and caps
//! journeys against. It is built once at start-up, either from the built-in
//! defaults or from a YAML file via [`ConfigLoader`](super::ConfigLoader),
//! and is read-only afterwards.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{Pence, ZonePair};

use super::types::{CapConfig, FareConfig, FareRulesFile};

/// The zone pair whose caps apply when no journey has been recorded for a period.
pub const DEFAULT_CAP_ZONE: ZonePair = ZonePair::new(1, 1);

/// Immutable fare and cap tables keyed by zone pair.
///
/// # Example
///
/// ```
/// use fare_engine::config::FareRules;
/// use fare_engine::models::ZonePair;
///
/// let rules = FareRules::default();
/// assert_eq!(rules.get_fare(ZonePair::new(1, 2), true).unwrap(), 35);
/// assert_eq!(rules.get_daily_cap(ZonePair::new(1, 2)).unwrap(), 120);
/// assert!(rules.get_fare(ZonePair::new(3, 3), true).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareRules {
    fares: HashMap<ZonePair, FareConfig>,
    caps: HashMap<ZonePair, CapConfig>,
}

impl FareRules {
    /// Creates rule tables from fare and cap entries.
    ///
    /// Later entries for the same zone pair replace earlier ones; the loader
    /// rejects such duplicates before they reach this point.
    pub fn new(fares: Vec<FareConfig>, caps: Vec<CapConfig>) -> Self {
        Self {
            fares: fares.into_iter().map(|f| (f.zone_pair, f)).collect(),
            caps: caps.into_iter().map(|c| (c.zone_pair, c)).collect(),
        }
    }

    /// Returns the peak or off-peak fare for a zone pair.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownZonePair`] if the fare table has no entry.
    pub fn get_fare(&self, zone_pair: ZonePair, is_peak: bool) -> EngineResult<Pence> {
        let fare = self
            .fares
            .get(&zone_pair)
            .ok_or_else(|| unknown(zone_pair, "fare"))?;

        Ok(if is_peak {
            fare.peak_fare
        } else {
            fare.off_peak_fare
        })
    }

    /// Returns the daily cap for a zone pair.
    pub fn get_daily_cap(&self, zone_pair: ZonePair) -> EngineResult<Pence> {
        self.cap(zone_pair).map(|c| c.daily_cap)
    }

    /// Returns the weekly cap for a zone pair.
    pub fn get_weekly_cap(&self, zone_pair: ZonePair) -> EngineResult<Pence> {
        self.cap(zone_pair).map(|c| c.weekly_cap)
    }

    fn cap(&self, zone_pair: ZonePair) -> EngineResult<&CapConfig> {
        self.caps
            .get(&zone_pair)
            .ok_or_else(|| unknown(zone_pair, "cap"))
    }

    /// Picks the zone pair whose caps govern a period.
    ///
    /// The farthest journey sets the cap: the pair with the highest upper
    /// zone wins, the first one seen wins a tie, and an empty period falls
    /// back to [`DEFAULT_CAP_ZONE`].
    ///
    /// # Example
    ///
    /// ```
    /// use fare_engine::config::FareRules;
    /// use fare_engine::models::ZonePair;
    ///
    /// let rules = FareRules::default();
    /// let seen = [ZonePair::new(1, 1), ZonePair::new(2, 2), ZonePair::new(1, 2)];
    /// assert_eq!(rules.applicable_cap_zone(&seen), ZonePair::new(2, 2));
    /// assert_eq!(rules.applicable_cap_zone(&[]).to_string(), "1-1");
    /// ```
    pub fn applicable_cap_zone(&self, zone_pairs: &[ZonePair]) -> ZonePair {
        zone_pairs
            .iter()
            .fold(None, |best: Option<ZonePair>, pair| match best {
                Some(current) if current.high() >= pair.high() => Some(current),
                _ => Some(*pair),
            })
            .unwrap_or(DEFAULT_CAP_ZONE)
    }

    /// Returns every zone pair present in the fare table, in ascending order.
    pub fn zone_pairs(&self) -> Vec<ZonePair> {
        let mut pairs: Vec<ZonePair> = self.fares.keys().copied().collect();
        pairs.sort();
        pairs
    }

    /// Returns the tables in file form, sorted by zone pair.
    pub fn to_file(&self) -> FareRulesFile {
        let mut fares: Vec<FareConfig> = self.fares.values().copied().collect();
        fares.sort_by_key(|f| f.zone_pair);
        let mut caps: Vec<CapConfig> = self.caps.values().copied().collect();
        caps.sort_by_key(|c| c.zone_pair);
        FareRulesFile { fares, caps }
    }
}

impl Default for FareRules {
    /// The standard three-pair fare table.
    fn default() -> Self {
        let fare = |low, high, peak_fare, off_peak_fare| FareConfig {
            zone_pair: ZonePair::new(low, high),
            peak_fare,
            off_peak_fare,
        };
        let cap = |low, high, daily_cap, weekly_cap| CapConfig {
            zone_pair: ZonePair::new(low, high),
            daily_cap,
            weekly_cap,
        };

        Self::new(
            vec![fare(1, 1, 30, 25), fare(1, 2, 35, 30), fare(2, 2, 25, 20)],
            vec![cap(1, 1, 100, 500), cap(1, 2, 120, 600), cap(2, 2, 80, 400)],
        )
    }
}

impl From<FareRulesFile> for FareRules {
    fn from(file: FareRulesFile) -> Self {
        Self::new(file.fares, file.caps)
    }
}

fn unknown(zone_pair: ZonePair, table: &'static str) -> EngineError {
    EngineError::UnknownZonePair {
        zone_pair: zone_pair.to_string(),
        table,
    }
}
