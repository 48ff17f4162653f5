//! HTTP API module for the Attendance Eligibility Engine.
//!
//! Exposes `POST /evaluate`, which takes raw timesheet grids and returns one
//! result row per line together with a run summary.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EvaluationRequest;
pub use response::{ApiError, ApiErrorResponse, EvaluationResponse};
pub use state::AppState;
