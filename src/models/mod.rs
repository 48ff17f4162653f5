//! Core data models for the Attendance Eligibility Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod decision;
mod duration_kind;
mod pattern;
mod request;
mod time_cell;
mod work_code;

pub use decision::{Decision, DecisionStatus, MismatchReason};
pub use duration_kind::DurationKind;
pub use pattern::{TimePattern, WorkCategory};
pub use request::AttendanceRequest;
pub use time_cell::{TimeCell, parse_time_of_day};
pub use work_code::normalize_work_code;
