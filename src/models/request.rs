//! The typed timesheet line produced by the raw table normalizer.

use serde::{Deserialize, Serialize};

use super::TimeCell;

/// One logical timesheet line.
///
/// Built once from a three-row block of a raw grid and never modified
/// afterwards. All downstream logic reads these named fields; nothing past the
/// normalizer touches positional cells.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRequest;
///
/// let request = AttendanceRequest {
///     document_id: "HR-2025-0412".to_string(),
///     employee_name: "Kim Minjun".to_string(),
///     category: "시간외근무".to_string(),
///     start: "00:20".into(),
///     end: "01:20".into(),
///     requested_code: "1:00".to_string(),
///     clock_in: "10:30".into(),
///     clock_out: "02:00".into(),
///     ..Default::default()
/// };
/// assert!(request.start.time().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// Identifier of the source document the line was read from.
    pub document_id: String,
    /// Line number as printed in the document.
    #[serde(default)]
    pub line_no: String,
    /// Work category text (e.g. holiday work, overtime).
    pub category: String,
    /// Department of the employee.
    #[serde(default)]
    pub department: String,
    /// Name of the employee.
    pub employee_name: String,
    /// Employee number.
    #[serde(default)]
    pub employee_id: String,
    /// Requested shift start.
    pub start: TimeCell,
    /// Requested shift end.
    pub end: TimeCell,
    /// Requested work-time code, as typed (e.g. `"1:00"`, `"0100"`, `"1.00"`).
    pub requested_code: String,
    /// Recorded clock-in time.
    #[serde(default)]
    pub clock_in: TimeCell,
    /// Recorded clock-out time.
    #[serde(default)]
    pub clock_out: TimeCell,
    /// Work date text.
    #[serde(default)]
    pub work_date: String,
    /// Compensation type text.
    #[serde(default)]
    pub compensation_type: String,
    /// Free-text description of the work.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization_defaults_optional_fields() {
        let json = r#"{
            "document_id": "HR-001",
            "category": "휴일근무",
            "employee_name": "Lee Seoyeon",
            "start": "00:20",
            "end": "08:00",
            "requested_code": "0740",
            "clock_in": "23:30"
        }"#;

        let request: AttendanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.document_id, "HR-001");
        assert_eq!(request.clock_in.raw(), "23:30");
        assert!(request.clock_out.is_blank());
        assert!(request.work_date.is_empty());
    }

    #[test]
    fn test_request_serializes_times_as_text() {
        let request = AttendanceRequest {
            document_id: "HR-001".to_string(),
            start: "07:00".into(),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["start"], "07:00");
        assert_eq!(value["end"], "");
    }
}
