//! The loaded, immutable pattern catalog.

use crate::error::{EngineError, EngineResult};
use crate::models::{TimePattern, WorkCategory};

use super::AttendanceRules;

/// Name of the holiday pattern list in configuration files.
pub const HOLIDAY_PATTERN_LIST: &str = "holidaywork_patterns";

/// Name of the overtime pattern list in configuration files.
pub const OVERTIME_PATTERN_LIST: &str = "overtime_patterns";

/// Accepted patterns per category plus the rule tables.
///
/// Built once at startup and only read afterwards; it is shared across
/// threads without locking (the API keeps it behind an `Arc`). Pattern order
/// within each list is the declaration order and decides which pattern wins.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{AttendanceRules, PatternCatalog};
/// use attendance_engine::models::{DurationKind, TimePattern, WorkCategory};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let rules = AttendanceRules::new(Vec::<String>::new(), "Holiday Work", "Overtime", vec![]).unwrap();
/// let overtime = vec![TimePattern::new(
///     WorkCategory::Overtime,
///     NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
///     NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
///     ["0300"],
///     [(DurationKind::OrdinaryOvertime, Decimal::new(3, 0))],
/// )];
///
/// let catalog = PatternCatalog::new(vec![], overtime, rules).unwrap();
/// assert_eq!(catalog.patterns_for(WorkCategory::Overtime).len(), 1);
/// assert!(catalog.patterns_for(WorkCategory::HolidayWork).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    holiday_patterns: Vec<TimePattern>,
    overtime_patterns: Vec<TimePattern>,
    rules: AttendanceRules,
}

impl PatternCatalog {
    /// Assembles a catalog, checking every pattern.
    ///
    /// Fails if a pattern sits in the wrong list or grants no allocation;
    /// an eligible decision must always allocate something.
    pub fn new(
        holiday_patterns: Vec<TimePattern>,
        overtime_patterns: Vec<TimePattern>,
        rules: AttendanceRules,
    ) -> EngineResult<Self> {
        check_list(HOLIDAY_PATTERN_LIST, WorkCategory::HolidayWork, &holiday_patterns)?;
        check_list(OVERTIME_PATTERN_LIST, WorkCategory::Overtime, &overtime_patterns)?;

        Ok(Self {
            holiday_patterns,
            overtime_patterns,
            rules,
        })
    }

    /// The ordered patterns for a category.
    pub fn patterns_for(&self, category: WorkCategory) -> &[TimePattern] {
        match category {
            WorkCategory::HolidayWork => &self.holiday_patterns,
            WorkCategory::Overtime => &self.overtime_patterns,
        }
    }

    /// The roster, labels and attendance-code rules.
    pub fn rules(&self) -> &AttendanceRules {
        &self.rules
    }

    /// Total number of patterns across both lists.
    pub fn pattern_count(&self) -> usize {
        self.holiday_patterns.len() + self.overtime_patterns.len()
    }
}

fn check_list(list: &str, category: WorkCategory, patterns: &[TimePattern]) -> EngineResult<()> {
    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.category() != category {
            return Err(EngineError::InvalidPattern {
                list: list.to_string(),
                index,
                message: format!(
                    "{} pattern declared in the {} list",
                    pattern.category(),
                    category
                ),
            });
        }
        if pattern.allocations().is_empty() {
            return Err(EngineError::InvalidPattern {
                list: list.to_string(),
                index,
                message: "duration map is empty".to_string(),
            });
        }
    }
    Ok(())
}
