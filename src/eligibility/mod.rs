//! Eligibility rules for the Attendance Eligibility Engine.
//!
//! This module decides, per timesheet line, whether the claimed work time
//! matches an accepted pattern: roster exemption, clock-time completeness,
//! category dispatch, the per-pattern predicates, and the two overnight
//! exceptions for shifts that cross midnight.

mod evaluate;
mod overnight_exception;
mod pattern_match;

pub use evaluate::{evaluate, evaluate_all};
pub use overnight_exception::overnight_exception_applies;
pub use pattern_match::{PatternMatch, ShiftClaim, match_pattern};
