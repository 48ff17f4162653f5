//! End-to-end batch evaluation: raw grids in, result rows out.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::PatternCatalog;
use crate::eligibility::evaluate;
use crate::models::DecisionStatus;
use crate::normalizer::{RawGrid, normalize_documents};
use crate::report::{ResultRow, Table, project, result_table};

/// Counts describing one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    /// Documents received.
    pub documents: usize,
    /// Documents whose parsing stopped on a malformed block.
    pub halted_documents: Vec<String>,
    /// Timesheet lines reconstructed and evaluated.
    pub records: usize,
    /// Lines that matched a pattern.
    pub eligible: usize,
    /// Lines skipped because the employee is exempt.
    pub exempt_by_roster: usize,
    /// Lines without usable clock-in/out.
    pub missing_clock_times: usize,
    /// Lines whose category is not evaluated.
    pub unsupported_category: usize,
    /// Lines that matched no pattern.
    pub pattern_mismatch: usize,
}

impl PipelineSummary {
    fn record(&mut self, status: &DecisionStatus) {
        self.records += 1;
        match status {
            DecisionStatus::Eligible => self.eligible += 1,
            DecisionStatus::ExemptByRoster => self.exempt_by_roster += 1,
            DecisionStatus::MissingClockTimes => self.missing_clock_times += 1,
            DecisionStatus::UnsupportedCategory => self.unsupported_category += 1,
            DecisionStatus::PatternMismatch(_) => self.pattern_mismatch += 1,
        }
    }
}

/// Result rows of a run, in document and grid order, with its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    /// One row per reconstructed line.
    pub results: Vec<ResultRow>,
    /// Aggregate counts.
    pub summary: PipelineSummary,
}

impl PipelineReport {
    /// The results as a table ready for CSV export.
    ///
    /// Each document's rows form one table, and the tables are consolidated
    /// by column label.
    pub fn to_table(&self) -> Table {
        if self.results.is_empty() {
            return result_table(&[]);
        }

        let per_document = self
            .results
            .chunk_by(|a, b| a.request.document_id == b.request.document_id)
            .map(result_table);
        Table::consolidate(per_document)
    }
}

/// Normalizes every grid, evaluates every line and projects the results.
///
/// Never fails: malformed blocks only cut their own document short, and every
/// line that was read ends up with a status.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{AttendanceRules, PatternCatalog};
/// use attendance_engine::normalizer::RawGrid;
/// use attendance_engine::pipeline;
///
/// let rules = AttendanceRules::new(["Park Jiho"], "휴일근무", "시간외근무", vec![]).unwrap();
/// let catalog = PatternCatalog::new(vec![], vec![], rules).unwrap();
/// let grid = RawGrid::new("DOC-1", vec![
///     vec!["header"], vec!["header"], vec!["header"],
///     vec!["1", "휴일근무", "QA", "Park Jiho", "08:30", "8:00", "", "2025.04.13", "", ""],
///     vec!["20190001", "17:30", ""],
/// ]);
///
/// let report = pipeline::run(&[grid], &catalog);
/// assert_eq!(report.summary.exempt_by_roster, 1);
/// ```
pub fn run(grids: &[RawGrid], catalog: &PatternCatalog) -> PipelineReport {
    let batch = normalize_documents(grids);

    let mut summary = PipelineSummary {
        documents: batch.documents.len(),
        halted_documents: batch
            .defective_documents()
            .map(|d| d.document_id.clone())
            .collect(),
        ..Default::default()
    };

    let rules = catalog.rules();
    let mut results = Vec::with_capacity(batch.requests.len());
    for request in &batch.requests {
        let decision = evaluate(request, catalog);

        if matches!(decision.status(), DecisionStatus::PatternMismatch(r) if r.is_empty()) {
            warn!(
                document_id = %request.document_id,
                line_no = %request.line_no,
                category = %request.category,
                "No patterns configured for this category"
            );
        }

        summary.record(decision.status());
        results.push(project(request, &decision, rules));
    }

    info!(
        documents = summary.documents,
        records = summary.records,
        eligible = summary.eligible,
        exempt = summary.exempt_by_roster,
        missing_clock_times = summary.missing_clock_times,
        unsupported = summary.unsupported_category,
        mismatched = summary.pattern_mismatch,
        halted = summary.halted_documents.len(),
        "Pipeline run completed"
    );

    PipelineReport { results, summary }
}
