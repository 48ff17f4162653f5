//! Boundary exceptions for shifts that cross midnight.
//!
//! Clock-in and clock-out are recorded relative to the calendar day of the
//! timesheet line, while some patterns start just after midnight. A literal
//! same-day comparison would flag those lines as late, so two narrow rules
//! accept them. Any other boundary case is a genuine mismatch.

use chrono::NaiveTime;

use crate::models::WorkCategory;

const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid wall-clock time"),
    }
}

/// Start shared by every pattern the exceptions apply to.
const OVERNIGHT_PATTERN_START: NaiveTime = hm(0, 20);

/// Pattern ends eligible for the overtime continuation.
const OVERTIME_CONTINUATION_ENDS: [NaiveTime; 2] = [hm(1, 20), hm(2, 20)];

/// Latest clock-in accepted for the overtime continuation.
const OVERTIME_CONTINUATION_CLOCK_IN_CUTOFF: NaiveTime = hm(15, 40);

/// Earliest clock-in treated as the evening before a holiday night shift.
const HOLIDAY_CONTINUATION_CLOCK_IN_FLOOR: NaiveTime = hm(23, 0);

/// Returns true if one of the overnight exceptions covers the attendance window.
///
/// - Overtime continuation: overtime pattern from 00:20 to 01:20 or 02:20,
///   clock-in at or before 15:40 (the day shift the overtime continues), and
///   clock-out at or after the pattern end.
/// - Holiday continuation: holiday pattern from 00:20, clock-in at or after
///   23:00 (the evening before), and clock-out at or after the pattern end.
///
/// # Example
///
/// ```
/// use attendance_engine::eligibility::overnight_exception_applies;
/// use attendance_engine::models::WorkCategory;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
///
/// // Day shift from 10:30 continuing to 02:00 covers a 00:20-01:20 window.
/// assert!(overnight_exception_applies(
///     WorkCategory::Overtime, t(10, 30), t(2, 0), t(0, 20), t(1, 20),
/// ));
/// // Clock-in after 15:40 does not.
/// assert!(!overnight_exception_applies(
///     WorkCategory::Overtime, t(16, 0), t(2, 0), t(0, 20), t(1, 20),
/// ));
/// ```
pub fn overnight_exception_applies(
    category: WorkCategory,
    clock_in: NaiveTime,
    clock_out: NaiveTime,
    pattern_start: NaiveTime,
    pattern_end: NaiveTime,
) -> bool {
    if pattern_start != OVERNIGHT_PATTERN_START || clock_out < pattern_end {
        return false;
    }

    match category {
        WorkCategory::Overtime => {
            OVERTIME_CONTINUATION_ENDS.contains(&pattern_end)
                && clock_in <= OVERTIME_CONTINUATION_CLOCK_IN_CUTOFF
        }
        WorkCategory::HolidayWork => clock_in >= HOLIDAY_CONTINUATION_CLOCK_IN_FLOOR,
    }
}
