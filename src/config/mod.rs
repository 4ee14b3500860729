//! Fare rule configuration for the Fare Calculation Engine.
//!
//! This module provides the immutable [`FareRules`] tables and the
//! functionality to load them from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use fare_engine::config::ConfigLoader;
//!
//! let rules = ConfigLoader::load("./config/fares.yaml").unwrap().into_rules();
//! println!("Configured zone pairs: {:?}", rules.zone_pairs());
//! ```

mod loader;
mod rules;
mod types;

pub use loader::ConfigLoader;
pub use rules::{DEFAULT_CAP_ZONE, FareRules};
pub use types::{CapConfig, FareConfig, FareRulesFile};
