//! Paid-duration categories.
//!
//! Every eligible timesheet line is apportioned into one or more of nine
//! duration kinds. Each kind has a configuration key (used in pattern files)
//! and an output label (used as the result-table column header). Both are part
//! of the external contract and must not change.

use serde::{Deserialize, Serialize};

/// One of the nine paid-duration categories an eligible record is allocated into.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DurationKind;
///
/// let kind = DurationKind::HolidayNightWork;
/// assert_eq!(kind.key(), "minuit_over_time");
/// assert_eq!(kind.label(), "특근심야정취");
/// assert_eq!(DurationKind::from_key("minuit_over_time"), Some(kind));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DurationKind {
    /// Ordinary-day regular hours.
    #[serde(rename = "work_time")]
    OrdinaryWork,
    /// Ordinary-day overtime.
    #[serde(rename = "overtime")]
    OrdinaryOvertime,
    /// Ordinary-day night premium.
    #[serde(rename = "night_time")]
    OrdinaryNight,
    /// Holiday regular hours.
    #[serde(rename = "work_extra_time")]
    HolidayWork,
    /// Holiday night hours.
    #[serde(rename = "minuit_over_time")]
    HolidayNightWork,
    /// Holiday overtime.
    #[serde(rename = "holiday_over_time")]
    HolidayOvertime,
    /// Holiday night overtime.
    #[serde(rename = "extra_minuit_over_time")]
    HolidayNightOvertime,
    /// Paid support leave.
    #[serde(rename = "work_support")]
    PaidSupportLeave,
    /// Lateness deduction.
    #[serde(rename = "late_time")]
    Lateness,
}

impl DurationKind {
    /// All kinds in output-column order.
    pub const ALL: [DurationKind; 9] = [
        DurationKind::OrdinaryWork,
        DurationKind::OrdinaryOvertime,
        DurationKind::OrdinaryNight,
        DurationKind::HolidayWork,
        DurationKind::HolidayNightWork,
        DurationKind::HolidayOvertime,
        DurationKind::HolidayNightOvertime,
        DurationKind::PaidSupportLeave,
        DurationKind::Lateness,
    ];

    /// Returns the key used for this kind in pattern configuration files.
    pub fn key(self) -> &'static str {
        match self {
            DurationKind::OrdinaryWork => "work_time",
            DurationKind::OrdinaryOvertime => "overtime",
            DurationKind::OrdinaryNight => "night_time",
            DurationKind::HolidayWork => "work_extra_time",
            DurationKind::HolidayNightWork => "minuit_over_time",
            DurationKind::HolidayOvertime => "holiday_over_time",
            DurationKind::HolidayNightOvertime => "extra_minuit_over_time",
            DurationKind::PaidSupportLeave => "work_support",
            DurationKind::Lateness => "late_time",
        }
    }

    /// Returns the result-table column label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            DurationKind::OrdinaryWork => "평일정취",
            DurationKind::OrdinaryOvertime => "평일연장",
            DurationKind::OrdinaryNight => "평일심야연장",
            DurationKind::HolidayWork => "특근정취",
            DurationKind::HolidayNightWork => "특근심야정취",
            DurationKind::HolidayOvertime => "특근연장",
            DurationKind::HolidayNightOvertime => "특근심야연장",
            DurationKind::PaidSupportLeave => "유급휴가",
            DurationKind::Lateness => "지각",
        }
    }

    /// Looks up a kind by its configuration key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl std::fmt::Display for DurationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
