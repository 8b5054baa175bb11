//! HTTP API module for the Salary Engine.
//!
//! This module provides the REST API endpoints for calculating take-home
//! salary and inspecting the loaded tax brackets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RawNumber};
pub use response::{ApiError, CalculationResponse, FormattedSalary, TaxBracketsResponse};
pub use state::AppState;
