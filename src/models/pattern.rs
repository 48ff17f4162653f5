//! Accepted time-window patterns.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DurationKind, normalize_work_code};

/// The work categories the engine can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkCategory {
    /// Work on a holiday.
    HolidayWork,
    /// Overtime on an ordinary day.
    Overtime,
}

impl std::fmt::Display for WorkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkCategory::HolidayWork => write!(f, "holiday_work"),
            WorkCategory::Overtime => write!(f, "overtime"),
        }
    }
}

/// A declared acceptable shift window with the allocations it authorizes.
///
/// Immutable once built. Accepted codes are stored normalized (see
/// [`normalize_work_code`]) so they compare directly against normalized
/// request codes.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{DurationKind, TimePattern, WorkCategory};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let pattern = TimePattern::new(
///     WorkCategory::Overtime,
///     NaiveTime::from_hms_opt(0, 20, 0).unwrap(),
///     NaiveTime::from_hms_opt(1, 20, 0).unwrap(),
///     ["1:00"],
///     [(DurationKind::OrdinaryNight, Decimal::ONE)],
/// );
/// assert!(pattern.accepts_code("0100"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePattern {
    category: WorkCategory,
    start: NaiveTime,
    end: NaiveTime,
    accepted_codes: BTreeSet<String>,
    allocations: BTreeMap<DurationKind, Decimal>,
}

impl TimePattern {
    /// Creates a pattern, normalizing every accepted code.
    pub fn new<C, A>(
        category: WorkCategory,
        start: NaiveTime,
        end: NaiveTime,
        accepted_codes: C,
        allocations: A,
    ) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        A: IntoIterator<Item = (DurationKind, Decimal)>,
    {
        Self {
            category,
            start,
            end,
            accepted_codes: accepted_codes
                .into_iter()
                .map(|code| normalize_work_code(code.as_ref()))
                .collect(),
            allocations: allocations.into_iter().collect(),
        }
    }

    /// The category this pattern belongs to.
    pub fn category(&self) -> WorkCategory {
        self.category
    }

    /// Required shift start.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Required shift end.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Normalized work-time codes accepted by this pattern.
    pub fn accepted_codes(&self) -> &BTreeSet<String> {
        &self.accepted_codes
    }

    /// Returns true if the already-normalized code is accepted.
    pub fn accepts_code(&self, normalized_code: &str) -> bool {
        self.accepted_codes.contains(normalized_code)
    }

    /// Duration allocations granted on a full match.
    pub fn allocations(&self) -> &BTreeMap<DurationKind, Decimal> {
        &self.allocations
    }
}
