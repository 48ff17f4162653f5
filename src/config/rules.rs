//! Lookup tables loaded alongside the pattern catalog.
//!
//! The exemption roster, the category text used in submitted timesheets and
//! the attendance-code rules are data. Keeping them here leaves the rule
//! engine free of embedded names and codes.

use std::collections::BTreeSet;

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkCategory;

/// Maps an eligible line to the attendance-type code of the downstream system.
///
/// A rule matches when its category matches and, if set, its start and end
/// equal the requested shift start and end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceCodeRule {
    /// Code sent to the attendance system.
    pub code: String,
    /// Category the rule applies to.
    pub category: WorkCategory,
    /// Required shift start, if any.
    pub start: Option<NaiveTime>,
    /// Required shift end, if any.
    pub end: Option<NaiveTime>,
}

impl AttendanceCodeRule {
    /// Returns true if the rule applies to a line with this category and window.
    pub fn matches(
        &self,
        category: WorkCategory,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> bool {
        self.category == category
            && self.start.is_none_or(|s| start == Some(s))
            && self.end.is_none_or(|e| end == Some(e))
    }
}

/// Roster, category labels and attendance-code rules.
///
/// # Example
///
/// ```
/// use attendance_engine::config::AttendanceRules;
/// use attendance_engine::models::WorkCategory;
///
/// let rules = AttendanceRules::new(
///     ["Park Jiho"],
///     "Holiday Work",
///     "Overtime",
///     vec![],
/// )
/// .unwrap();
///
/// assert!(rules.is_exempt(" Park Jiho "));
/// assert_eq!(rules.category_for("Overtime"), Some(WorkCategory::Overtime));
/// assert_eq!(rules.category_for("Annual Leave"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRules {
    exempt_employees: BTreeSet<String>,
    holiday_label: String,
    overtime_label: String,
    attendance_codes: Vec<AttendanceCodeRule>,
}

impl AttendanceRules {
    /// Builds the rule tables.
    ///
    /// Names and labels are trimmed. Fails if a label is empty or both
    /// categories share the same label.
    pub fn new<I>(
        exempt_employees: I,
        holiday_label: impl Into<String>,
        overtime_label: impl Into<String>,
        attendance_codes: Vec<AttendanceCodeRule>,
    ) -> EngineResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let holiday_label = holiday_label.into().trim().to_string();
        let overtime_label = overtime_label.into().trim().to_string();

        if holiday_label.is_empty() || overtime_label.is_empty() {
            return Err(EngineError::InvalidRules {
                message: "category labels must not be empty".to_string(),
            });
        }
        if holiday_label == overtime_label {
            return Err(EngineError::InvalidRules {
                message: format!(
                    "holiday_work and overtime share the label '{}'",
                    holiday_label
                ),
            });
        }

        let exempt_employees = exempt_employees
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        Ok(Self {
            exempt_employees,
            holiday_label,
            overtime_label,
            attendance_codes,
        })
    }

    /// Returns true if the employee is on the exemption roster.
    pub fn is_exempt(&self, employee_name: &str) -> bool {
        self.exempt_employees.contains(employee_name.trim())
    }

    /// Resolves submitted category text to an evaluable category.
    pub fn category_for(&self, text: &str) -> Option<WorkCategory> {
        let text = text.trim();
        if text == self.holiday_label {
            Some(WorkCategory::HolidayWork)
        } else if text == self.overtime_label {
            Some(WorkCategory::Overtime)
        } else {
            None
        }
    }

    /// Category text for a work category.
    pub fn label_for(&self, category: WorkCategory) -> &str {
        match category {
            WorkCategory::HolidayWork => &self.holiday_label,
            WorkCategory::Overtime => &self.overtime_label,
        }
    }

    /// The first attendance code whose rule matches, if any.
    pub fn attendance_code_for(
        &self,
        category: WorkCategory,
        start: Option<NaiveTime>,
        end: Option<NaiveTime>,
    ) -> Option<&str> {
        self.attendance_codes
            .iter()
            .find(|rule| rule.matches(category, start, end))
            .map(|rule| rule.code.as_str())
    }

    /// The exemption roster.
    pub fn exempt_employees(&self) -> &BTreeSet<String> {
        &self.exempt_employees
    }

    /// The attendance-code rules in evaluation order.
    pub fn attendance_codes(&self) -> &[AttendanceCodeRule] {
        &self.attendance_codes
    }
}
