//! HTTP API for the Time Metrics Engine.
//!
//! This module provides the axum-based HTTP surface over the calculator:
//! request/response types, application state, and route handlers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchCalculationRequest, CalculationRequest, ScheduleRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
