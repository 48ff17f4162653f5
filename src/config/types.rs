//! Configuration file structures.
//!
//! These are the raw shapes deserialized from `patterns.yaml` and
//! `rules.yaml`. The loader validates them into [`super::PatternCatalog`];
//! nothing outside the config module works with these types directly.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{DurationKind, WorkCategory};

/// Top-level structure of `patterns.yaml`.
///
/// Both lists are optional at the serde level so the loader can report a
/// missing list by name instead of as a generic parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternFile {
    /// Patterns for holiday work, in evaluation order.
    pub holidaywork_patterns: Option<Vec<PatternEntry>>,
    /// Patterns for overtime, in evaluation order.
    pub overtime_patterns: Option<Vec<PatternEntry>>,
}

/// One pattern entry as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternEntry {
    /// Required shift start, `HH:MM`.
    pub start: String,
    /// Required shift end, `HH:MM`.
    pub end: String,
    /// Accepted work-time codes.
    #[serde(default)]
    pub work_times: Vec<String>,
    /// Allocations granted on a full match, keyed by duration-kind key.
    #[serde(default)]
    pub duration: BTreeMap<DurationKind, Decimal>,
}

/// Top-level structure of `rules.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesFile {
    /// Employees whose lines are never evaluated.
    #[serde(default)]
    pub exempt_employees: Vec<String>,
    /// Category text as it appears in submitted timesheets.
    pub category_labels: CategoryLabels,
    /// Attendance-code rules, first match wins.
    #[serde(default)]
    pub attendance_codes: Vec<AttendanceCodeEntry>,
}

/// Category text for each evaluable work category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryLabels {
    /// Text used for holiday work.
    pub holiday_work: String,
    /// Text used for overtime.
    pub overtime: String,
}

/// One attendance-code rule as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceCodeEntry {
    /// Code sent to the attendance system.
    pub code: String,
    /// Category the rule applies to.
    pub category: WorkCategory,
    /// Optional required shift start, `HH:MM`.
    #[serde(default)]
    pub start: Option<String>,
    /// Optional required shift end, `HH:MM`.
    #[serde(default)]
    pub end: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_file_parses_json_body() {
        let json = r#"{
            "holidaywork_patterns": [
                {"start": "08:30", "end": "17:30", "work_times": ["0800"], "duration": {"work_extra_time": 8}}
            ],
            "overtime_patterns": []
        }"#;

        let file: PatternFile = serde_yaml::from_str(json).unwrap();
        let holiday = file.holidaywork_patterns.unwrap();
        assert_eq!(holiday.len(), 1);
        assert_eq!(holiday[0].duration[&DurationKind::HolidayWork], Decimal::new(8, 0));
        assert!(file.overtime_patterns.unwrap().is_empty());
    }

    #[test]
    fn test_missing_list_deserializes_as_none() {
        let file: PatternFile = serde_yaml::from_str("holidaywork_patterns: []\n").unwrap();
        assert!(file.holidaywork_patterns.is_some());
        assert!(file.overtime_patterns.is_none());
    }

    #[test]
    fn test_unknown_duration_key_is_rejected() {
        let yaml = r#"
start: "08:30"
end: "17:30"
work_times: ["0800"]
duration:
  bonus_time: 1
"#;
        let result: Result<PatternEntry, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_rules_file_defaults() {
        let yaml = r#"
category_labels:
  holiday_work: 휴일근무
  overtime: 시간외근무
"#;
        let rules: RulesFile = serde_yaml::from_str(yaml).unwrap();
        assert!(rules.exempt_employees.is_empty());
        assert!(rules.attendance_codes.is_empty());
        assert_eq!(rules.category_labels.overtime, "시간외근무");
    }
}
