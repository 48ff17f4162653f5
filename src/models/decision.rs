//! Evaluation outcomes.
//!
//! A [`Decision`] is produced for every [`super::AttendanceRequest`]. Its
//! allocation map is non-empty exactly when the status is
//! [`DecisionStatus::Eligible`]; the constructors are the only way to build
//! one, which keeps that true.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DurationKind;

/// A predicate that failed when comparing a request against one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchReason {
    /// Requested start differs from the pattern start.
    StartMismatch,
    /// Requested end differs from the pattern end.
    EndMismatch,
    /// Requested work-time code is not accepted by the pattern.
    CodeMismatch,
    /// Clock-in/out do not cover the pattern window and no exception applies.
    AttendanceWindow,
}

impl std::fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchReason::StartMismatch => write!(f, "start mismatch"),
            MismatchReason::EndMismatch => write!(f, "end mismatch"),
            MismatchReason::CodeMismatch => write!(f, "code mismatch"),
            MismatchReason::AttendanceWindow => {
                write!(f, "late/early-leave or other sequencing mismatch")
            }
        }
    }
}

/// The classification of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reasons", rename_all = "snake_case")]
pub enum DecisionStatus {
    /// A pattern fully matched.
    Eligible,
    /// The employee is on the exemption roster.
    ExemptByRoster,
    /// Clock-in or clock-out is blank or unparsable.
    MissingClockTimes,
    /// The category is neither holiday work nor overtime.
    UnsupportedCategory,
    /// No pattern fully matched; carries the reasons of the closest pattern.
    PatternMismatch(Vec<MismatchReason>),
}

impl DecisionStatus {
    /// Stable short code for the status.
    pub fn code(&self) -> &'static str {
        match self {
            DecisionStatus::Eligible => "eligible",
            DecisionStatus::ExemptByRoster => "exempt_by_roster",
            DecisionStatus::MissingClockTimes => "missing_clock_times",
            DecisionStatus::UnsupportedCategory => "unsupported_category",
            DecisionStatus::PatternMismatch(_) => "pattern_mismatch",
        }
    }
}

impl std::fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionStatus::Eligible => write!(f, "eligible"),
            DecisionStatus::ExemptByRoster => write!(f, "exempt by roster"),
            DecisionStatus::MissingClockTimes => write!(f, "missing clock-in/out"),
            DecisionStatus::UnsupportedCategory => write!(f, "unsupported category"),
            DecisionStatus::PatternMismatch(reasons) => {
                let joined = reasons
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "pattern mismatch ({})", joined)
            }
        }
    }
}

/// The result of evaluating one request.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Decision, DecisionStatus, MismatchReason};
///
/// let decision = Decision::pattern_mismatch(vec![MismatchReason::CodeMismatch]);
/// assert!(!decision.is_eligible());
/// assert!(decision.allocations().is_empty());
/// assert_eq!(decision.status().to_string(), "pattern mismatch (code mismatch)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    #[serde(flatten)]
    status: DecisionStatus,
    allocations: BTreeMap<DurationKind, Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_pattern: Option<usize>,
}

impl Decision {
    /// An eligible decision carrying the allocations of the matched pattern.
    ///
    /// Patterns always carry at least one allocation (the catalog rejects
    /// empty ones), so the result is never an eligible decision with nothing
    /// allocated.
    pub(crate) fn eligible(
        pattern_index: usize,
        allocations: BTreeMap<DurationKind, Decimal>,
    ) -> Self {
        debug_assert!(!allocations.is_empty());
        Self {
            status: DecisionStatus::Eligible,
            allocations,
            matched_pattern: Some(pattern_index),
        }
    }

    fn without_allocations(status: DecisionStatus) -> Self {
        Self {
            status,
            allocations: BTreeMap::new(),
            matched_pattern: None,
        }
    }

    /// The employee is exempt from evaluation.
    pub fn exempt_by_roster() -> Self {
        Self::without_allocations(DecisionStatus::ExemptByRoster)
    }

    /// Clock times are missing or unreadable.
    pub fn missing_clock_times() -> Self {
        Self::without_allocations(DecisionStatus::MissingClockTimes)
    }

    /// The category is not one the engine evaluates.
    pub fn unsupported_category() -> Self {
        Self::without_allocations(DecisionStatus::UnsupportedCategory)
    }

    /// No pattern matched.
    pub fn pattern_mismatch(reasons: Vec<MismatchReason>) -> Self {
        Self::without_allocations(DecisionStatus::PatternMismatch(reasons))
    }

    /// The status of this decision.
    pub fn status(&self) -> &DecisionStatus {
        &self.status
    }

    /// Returns true when a pattern fully matched.
    pub fn is_eligible(&self) -> bool {
        self.status == DecisionStatus::Eligible
    }

    /// Allocated durations; empty unless eligible.
    pub fn allocations(&self) -> &BTreeMap<DurationKind, Decimal> {
        &self.allocations
    }

    /// The allocation for one kind, if any.
    pub fn allocation(&self, kind: DurationKind) -> Option<Decimal> {
        self.allocations.get(&kind).copied()
    }

    /// Declaration index of the matched pattern within its category list.
    pub fn matched_pattern(&self) -> Option<usize> {
        self.matched_pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_eligible_constructors_have_no_allocations() {
        for decision in [
            Decision::exempt_by_roster(),
            Decision::missing_clock_times(),
            Decision::unsupported_category(),
            Decision::pattern_mismatch(vec![]),
        ] {
            assert!(!decision.is_eligible());
            assert!(decision.allocations().is_empty());
            assert_eq!(decision.matched_pattern(), None);
        }
    }

    #[test]
    fn test_eligible_carries_allocations_and_index() {
        let mut allocations = BTreeMap::new();
        allocations.insert(DurationKind::HolidayWork, Decimal::new(80, 1));
        let decision = Decision::eligible(2, allocations);

        assert!(decision.is_eligible());
        assert_eq!(
            decision.allocation(DurationKind::HolidayWork),
            Some(Decimal::new(80, 1))
        );
        assert_eq!(decision.allocation(DurationKind::Lateness), None);
        assert_eq!(decision.matched_pattern(), Some(2));
    }

    #[test]
    fn test_status_display_lists_reasons_in_order() {
        let status = DecisionStatus::PatternMismatch(vec![
            MismatchReason::StartMismatch,
            MismatchReason::AttendanceWindow,
        ]);
        assert_eq!(
            status.to_string(),
            "pattern mismatch (start mismatch, late/early-leave or other sequencing mismatch)"
        );
        assert_eq!(status.code(), "pattern_mismatch");
    }

    #[test]
    fn test_decision_serializes_status_and_reasons() {
        let decision = Decision::pattern_mismatch(vec![MismatchReason::EndMismatch]);
        let value = serde_json::to_value(&decision).unwrap();

        assert_eq!(value["status"], "pattern_mismatch");
        assert_eq!(value["reasons"][0], "end_mismatch");
        assert!(value["allocations"].as_object().unwrap().is_empty());
    }
}
