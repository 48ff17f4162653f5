//! Comparing one claimed shift against one pattern.

use chrono::NaiveTime;

use crate::models::{MismatchReason, TimePattern, WorkCategory};

use super::overnight_exception::overnight_exception_applies;

/// The parts of a request the pattern predicates look at.
///
/// Built only after the roster, completeness and category checks pass, so
/// clock times are always present here. The requested start and end may
/// still be unreadable; an unreadable value never equals a pattern time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftClaim {
    /// Resolved work category.
    pub category: WorkCategory,
    /// Requested start, if readable.
    pub start: Option<NaiveTime>,
    /// Requested end, if readable.
    pub end: Option<NaiveTime>,
    /// Normalized work-time code.
    pub code: String,
    /// Recorded clock-in.
    pub clock_in: NaiveTime,
    /// Recorded clock-out.
    pub clock_out: NaiveTime,
}

/// Outcome of comparing a claim against one declared pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Declaration index of the pattern within its list.
    pub index: usize,
    /// Failing predicates, in check order.
    pub failures: Vec<MismatchReason>,
}

impl PatternMatch {
    /// Returns true when no predicate failed.
    pub fn is_full(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Evaluates the four independent predicates of a pattern.
///
/// 1. requested start equals the pattern start
/// 2. requested end equals the pattern end
/// 3. the normalized code is accepted
/// 4. clock-in/out cover the window, either literally or through an
///    overnight exception
pub fn match_pattern(claim: &ShiftClaim, pattern: &TimePattern, index: usize) -> PatternMatch {
    let mut failures = Vec::new();

    if claim.start != Some(pattern.start()) {
        failures.push(MismatchReason::StartMismatch);
    }
    if claim.end != Some(pattern.end()) {
        failures.push(MismatchReason::EndMismatch);
    }
    if !pattern.accepts_code(&claim.code) {
        failures.push(MismatchReason::CodeMismatch);
    }
    if !covers_window(claim, pattern) {
        failures.push(MismatchReason::AttendanceWindow);
    }

    PatternMatch { index, failures }
}

fn covers_window(claim: &ShiftClaim, pattern: &TimePattern) -> bool {
    (claim.clock_in <= pattern.start() && claim.clock_out >= pattern.end())
        || overnight_exception_applies(
            claim.category,
            claim.clock_in,
            claim.clock_out,
            pattern.start(),
            pattern.end(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DurationKind;
    use rust_decimal::Decimal;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn evening_overtime() -> TimePattern {
        TimePattern::new(
            WorkCategory::Overtime,
            hm(17, 30),
            hm(20, 30),
            ["0300"],
            [(DurationKind::OrdinaryOvertime, Decimal::new(3, 0))],
        )
    }

    fn claim() -> ShiftClaim {
        ShiftClaim {
            category: WorkCategory::Overtime,
            start: Some(hm(17, 30)),
            end: Some(hm(20, 30)),
            code: "0300".to_string(),
            clock_in: hm(8, 25),
            clock_out: hm(20, 45),
        }
    }

    #[test]
    fn test_full_match() {
        let result = match_pattern(&claim(), &evening_overtime(), 0);
        assert!(result.is_full());
        assert_eq!(result.index, 0);
    }

    #[test]
    fn test_every_predicate_can_fail_independently() {
        let claim = ShiftClaim {
            start: Some(hm(18, 0)),
            end: Some(hm(21, 0)),
            code: "0330".to_string(),
            clock_out: hm(19, 0),
            ..claim()
        };

        let result = match_pattern(&claim, &evening_overtime(), 3);
        assert_eq!(
            result.failures,
            vec![
                MismatchReason::StartMismatch,
                MismatchReason::EndMismatch,
                MismatchReason::CodeMismatch,
                MismatchReason::AttendanceWindow,
            ]
        );
        assert_eq!(result.index, 3);
    }

    #[test]
    fn test_unreadable_start_never_matches() {
        let claim = ShiftClaim {
            start: None,
            ..claim()
        };
        let result = match_pattern(&claim, &evening_overtime(), 0);
        assert_eq!(result.failures, vec![MismatchReason::StartMismatch]);
    }

    #[test]
    fn test_boundary_clock_times_cover_window() {
        let claim = ShiftClaim {
            clock_in: hm(17, 30),
            clock_out: hm(20, 30),
            ..claim()
        };
        assert!(match_pattern(&claim, &evening_overtime(), 0).is_full());
    }

    #[test]
    fn test_early_leave_fails_window_only() {
        let claim = ShiftClaim {
            clock_out: hm(20, 29),
            ..claim()
        };
        let result = match_pattern(&claim, &evening_overtime(), 0);
        assert_eq!(result.failures, vec![MismatchReason::AttendanceWindow]);
    }
}
