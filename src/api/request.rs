//! Request types for the Attendance Eligibility Engine API.

use serde::{Deserialize, Serialize};

use crate::normalizer::RawGrid;

/// Request body for the `/evaluate` endpoint.
///
/// Each document carries the raw grid scraped from one submission, header
/// rows included.
///
/// ```json
/// {
///   "documents": [
///     { "document_id": "GW-2025-0413-07", "rows": [["..."], ["..."]] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The documents to evaluate, in order.
    pub documents: Vec<RawGrid>,
}
