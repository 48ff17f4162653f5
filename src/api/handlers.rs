//! HTTP request handlers for the Attendance Eligibility Engine API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::pipeline;

use super::request::EvaluationRequest;
use super::response::{ApiError, ApiErrorResponse, EvaluationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .with_state(state)
}

/// Handler for POST /evaluate.
///
/// Runs the full pipeline over the submitted grids and returns one result row
/// per timesheet line.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return rejection_response(correlation_id, rejection).into_response();
        }
    };

    if request.documents.is_empty() {
        warn!(correlation_id = %correlation_id, "Evaluation request without documents");
        return ApiErrorResponse::bad_request(ApiError::validation_error(
            "documents must contain at least one document",
        ))
        .into_response();
    }

    let started = Instant::now();
    let report = pipeline::run(&request.documents, state.catalog());

    info!(
        correlation_id = %correlation_id,
        documents = report.summary.documents,
        records = report.summary.records,
        eligible = report.summary.eligible,
        duration_us = started.elapsed().as_micros(),
        "Evaluation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(EvaluationResponse::new(correlation_id, report)),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
