//! Wall-clock cells taken from raw timesheet grids.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Parses a time-of-day cell such as `"08:30"`.
///
/// Surrounding whitespace is ignored. `HH:MM` is the expected form; a trailing
/// `:SS` is tolerated because spreadsheet exports sometimes add one. Blank or
/// unparsable text yields `None`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day(" 23:30 "), NaiveTime::from_hms_opt(23, 30, 0));
/// assert_eq!(parse_time_of_day(""), None);
/// assert_eq!(parse_time_of_day("late"), None);
/// ```
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

/// A grid cell holding a time of day.
///
/// Keeps the raw text (so results can echo exactly what was submitted) next
/// to the parsed value. Serializes as the raw string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TimeCell {
    raw: String,
    time: Option<NaiveTime>,
}

impl TimeCell {
    /// Builds a cell from raw text, trimming it and parsing the time.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into().trim().to_string();
        let time = parse_time_of_day(&raw);
        Self { raw, time }
    }

    /// The submitted text, trimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed time, if the text was a valid time of day.
    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Returns true when the cell holds no text at all.
    pub fn is_blank(&self) -> bool {
        self.raw.is_empty()
    }
}

impl From<String> for TimeCell {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for TimeCell {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<TimeCell> for String {
    fn from(cell: TimeCell) -> Self {
        cell.raw
    }
}
