//! HTTP API module for the Fare Calculation Engine.
//!
//! This module provides the REST API endpoints for calculating fares
//! and inspecting the active fare rules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
