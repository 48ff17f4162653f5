//! Response types for the Attendance Eligibility Engine API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pipeline::{PipelineReport, PipelineSummary};
use crate::report::ResultRow;

/// Successful response of the `/evaluate` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    /// Identifier logged with every event of this request.
    pub correlation_id: Uuid,
    /// Aggregate counts.
    pub summary: PipelineSummary,
    /// One row per timesheet line, in submission order.
    pub results: Vec<ResultRow>,
}

impl EvaluationResponse {
    /// Wraps a pipeline report.
    pub fn new(correlation_id: Uuid, report: PipelineReport) -> Self {
        Self {
            correlation_id,
            summary: report.summary,
            results: report.results,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// A request that parsed but is not acceptable.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A body that is not valid JSON for the endpoint.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
    }

    #[test]
    fn test_bad_request_status() {
        let response =
            ApiErrorResponse::bad_request(ApiError::validation_error("no documents")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_response_serializes_summary_and_results() {
        let id = Uuid::nil();
        let response = EvaluationResponse::new(
            id,
            PipelineReport {
                results: vec![],
                summary: PipelineSummary::default(),
            },
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["correlation_id"], id.to_string());
        assert_eq!(value["summary"]["records"], 0);
        assert!(value["results"].as_array().unwrap().is_empty());
    }
}
