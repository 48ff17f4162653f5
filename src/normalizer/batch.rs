//! Normalizing many documents at once.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::AttendanceRequest;

use super::grid::{BlockDefect, RawGrid, normalize_grid};

/// Per-document result of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    /// Identifier of the source document.
    pub document_id: String,
    /// Number of lines reconstructed.
    pub records: usize,
    /// Set when a malformed block stopped parsing early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect: Option<BlockDefect>,
}

/// All lines of a batch, concatenated in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBatch {
    /// Lines of every document, preserving document and grid order.
    pub requests: Vec<AttendanceRequest>,
    /// One summary per input document, in input order.
    pub documents: Vec<DocumentSummary>,
}

impl NormalizedBatch {
    /// Documents whose parsing stopped on a malformed block.
    pub fn defective_documents(&self) -> impl Iterator<Item = &DocumentSummary> {
        self.documents.iter().filter(|d| d.defect.is_some())
    }
}

/// Normalizes every grid and concatenates the lines.
///
/// A defect in one document never affects the others.
pub fn normalize_documents(grids: &[RawGrid]) -> NormalizedBatch {
    let mut requests = Vec::new();
    let mut documents = Vec::with_capacity(grids.len());

    for grid in grids {
        let outcome = normalize_grid(grid);
        debug!(
            document_id = %outcome.document_id,
            records = outcome.requests.len(),
            "Document normalized"
        );

        documents.push(DocumentSummary {
            document_id: outcome.document_id,
            records: outcome.requests.len(),
            defect: outcome.defect,
        });
        requests.extend(outcome.requests);
    }

    info!(
        documents = documents.len(),
        records = requests.len(),
        defective = documents.iter().filter(|d| d.defect.is_some()).count(),
        "Raw grids normalized"
    );

    NormalizedBatch {
        requests,
        documents,
    }
}
