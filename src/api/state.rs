//! Application state for the Fare Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::FareCalculationEngine;
use crate::config::FareRules;

/// Shared application state.
///
/// Holds the fare engine, which is read-only and shared by every request.
/// Each request still runs its own calculation with its own cap totals.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<FareCalculationEngine>,
}

impl AppState {
    /// Creates a new application state with an engine over the given rules.
    pub fn new(rules: FareRules) -> Self {
        Self {
            engine: Arc::new(FareCalculationEngine::new(rules)),
        }
    }

    /// Returns a reference to the fare engine.
    pub fn engine(&self) -> &FareCalculationEngine {
        &self.engine
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FareRules::default())
    }
}
