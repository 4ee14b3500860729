//! Fare Calculation Engine for zone-based travel
//!
//! This crate prices journeys between fare zones with peak and off-peak
//! fares, then applies daily and weekly spending caps chosen by the farthest
//! zone pair travelled in each period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
