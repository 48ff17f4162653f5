//! Request evaluation.

use crate::config::PatternCatalog;
use crate::models::{AttendanceRequest, Decision, normalize_work_code};

use super::pattern_match::{PatternMatch, ShiftClaim, match_pattern};

/// Classifies one timesheet line against the catalog.
///
/// The checks run in a fixed order and the first one that decides wins:
///
/// 1. **Roster exemption** - an exempt employee is returned as
///    `ExemptByRoster` before anything else is looked at, even missing times.
/// 2. **Completeness** - blank or unreadable clock-in/out gives
///    `MissingClockTimes`.
/// 3. **Category dispatch** - only the configured holiday and overtime labels
///    select a pattern list; anything else is `UnsupportedCategory`.
/// 4. **Pattern scan** - patterns are tried in declaration order and the first
///    full match makes the line `Eligible` with a copy of that pattern's
///    allocations. If none matches, the result is `PatternMismatch` with the
///    failures of the pattern that failed the fewest predicates, the earliest
///    declared one on ties. An empty list yields an empty reason set.
///
/// The function is pure: the same request and catalog always give the same
/// decision.
///
/// # Example
///
/// ```
/// use attendance_engine::config::{AttendanceRules, PatternCatalog};
/// use attendance_engine::eligibility::evaluate;
/// use attendance_engine::models::{AttendanceRequest, DecisionStatus};
///
/// let rules = AttendanceRules::new(Vec::<String>::new(), "Holiday Work", "Overtime", vec![]).unwrap();
/// let catalog = PatternCatalog::new(vec![], vec![], rules).unwrap();
///
/// let request = AttendanceRequest {
///     category: "Annual Leave".to_string(),
///     clock_in: "08:30".into(),
///     clock_out: "17:30".into(),
///     ..Default::default()
/// };
/// assert_eq!(evaluate(&request, &catalog).status(), &DecisionStatus::UnsupportedCategory);
/// ```
pub fn evaluate(request: &AttendanceRequest, catalog: &PatternCatalog) -> Decision {
    let rules = catalog.rules();

    if rules.is_exempt(&request.employee_name) {
        return Decision::exempt_by_roster();
    }

    let (Some(clock_in), Some(clock_out)) = (request.clock_in.time(), request.clock_out.time())
    else {
        return Decision::missing_clock_times();
    };

    let Some(category) = rules.category_for(&request.category) else {
        return Decision::unsupported_category();
    };

    let claim = ShiftClaim {
        category,
        start: request.start.time(),
        end: request.end.time(),
        code: normalize_work_code(&request.requested_code),
        clock_in,
        clock_out,
    };

    let mut closest: Option<PatternMatch> = None;
    for (index, pattern) in catalog.patterns_for(category).iter().enumerate() {
        let result = match_pattern(&claim, pattern, index);
        if result.is_full() {
            return Decision::eligible(index, pattern.allocations().clone());
        }
        // Strictly fewer failures replaces; ties keep the earlier pattern.
        if closest
            .as_ref()
            .is_none_or(|best| result.failures.len() < best.failures.len())
        {
            closest = Some(result);
        }
    }

    Decision::pattern_mismatch(closest.map(|best| best.failures).unwrap_or_default())
}

/// Evaluates many requests, returning decisions in input order.
pub fn evaluate_all(requests: &[AttendanceRequest], catalog: &PatternCatalog) -> Vec<Decision> {
    requests
        .iter()
        .map(|request| evaluate(request, catalog))
        .collect()
}
