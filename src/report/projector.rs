//! Projecting decisions back onto the submitted lines.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::AttendanceRules;
use crate::models::{AttendanceRequest, Decision, DecisionStatus, DurationKind, MismatchReason};

use super::Table;

/// Header of the request part of a result table, in output order.
pub const REQUEST_COLUMNS: [&str; 14] = [
    "document_id",
    "line_no",
    "category",
    "department",
    "employee_name",
    "employee_id",
    "start",
    "end",
    "requested_code",
    "clock_in",
    "clock_out",
    "work_date",
    "compensation_type",
    "description",
];

/// Column holding the status text.
pub const STATUS_COLUMN: &str = "status";

/// Column holding the derived attendance code.
pub const ATTENDANCE_CODE_COLUMN: &str = "attendance_code";

/// One submitted line with its evaluation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// The line as submitted.
    #[serde(flatten)]
    pub request: AttendanceRequest,
    /// Human-readable status, e.g. `pattern mismatch (start mismatch)`.
    pub status: String,
    /// Stable status code, e.g. `pattern_mismatch`.
    pub status_code: &'static str,
    /// Failing predicates of the closest pattern, empty unless mismatched.
    pub reasons: Vec<MismatchReason>,
    /// Paid durations, empty unless eligible.
    pub allocations: BTreeMap<DurationKind, Decimal>,
    /// Position of the matched pattern in its category list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_pattern: Option<usize>,
    /// Attendance-type code for the downstream system, eligible lines only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_code: Option<String>,
}

impl ResultRow {
    /// Cells of this row in the order of [`result_columns`].
    pub fn cells(&self) -> Vec<String> {
        let r = &self.request;
        let mut cells = vec![
            r.document_id.clone(),
            r.line_no.clone(),
            r.category.clone(),
            r.department.clone(),
            r.employee_name.clone(),
            r.employee_id.clone(),
            r.start.raw().to_string(),
            r.end.raw().to_string(),
            r.requested_code.clone(),
            r.clock_in.raw().to_string(),
            r.clock_out.raw().to_string(),
            r.work_date.clone(),
            r.compensation_type.clone(),
            r.description.clone(),
        ];
        cells.extend(DurationKind::ALL.iter().map(|kind| {
            self.allocations
                .get(kind)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }));
        cells.push(self.status.clone());
        cells.push(self.attendance_code.clone().unwrap_or_default());
        cells
    }
}

/// Full header of a result table: request fields, one column per duration
/// label, status, attendance code.
pub fn result_columns() -> Vec<&'static str> {
    REQUEST_COLUMNS
        .iter()
        .copied()
        .chain(DurationKind::ALL.iter().map(|kind| kind.label()))
        .chain([STATUS_COLUMN, ATTENDANCE_CODE_COLUMN])
        .collect()
}

/// Combines a line with its decision.
///
/// The attendance code is only derived for eligible lines.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceRules;
/// use attendance_engine::models::{AttendanceRequest, Decision};
/// use attendance_engine::report::project;
///
/// let rules = AttendanceRules::new(["Park Jiho"], "휴일근무", "시간외근무", vec![]).unwrap();
/// let request = AttendanceRequest {
///     employee_name: "Park Jiho".to_string(),
///     ..Default::default()
/// };
///
/// let row = project(&request, &Decision::exempt_by_roster(), &rules);
/// assert_eq!(row.status, "exempt by roster");
/// assert!(row.attendance_code.is_none());
/// ```
pub fn project(
    request: &AttendanceRequest,
    decision: &Decision,
    rules: &AttendanceRules,
) -> ResultRow {
    let reasons = match decision.status() {
        DecisionStatus::PatternMismatch(reasons) => reasons.clone(),
        _ => Vec::new(),
    };

    let attendance_code = if decision.is_eligible() {
        rules.category_for(&request.category).and_then(|category| {
            rules
                .attendance_code_for(category, request.start.time(), request.end.time())
                .map(str::to_string)
        })
    } else {
        None
    };

    ResultRow {
        request: request.clone(),
        status: decision.status().to_string(),
        status_code: decision.status().code(),
        reasons,
        allocations: decision.allocations().clone(),
        matched_pattern: decision.matched_pattern(),
        attendance_code,
    }
}

/// Builds the result table for a batch of rows.
pub fn result_table(rows: &[ResultRow]) -> Table {
    let mut table = Table::new(result_columns());
    for row in rows {
        table.push_row(row.cells());
    }
    table
}
