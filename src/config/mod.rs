//! Configuration loading and management for the Attendance Eligibility Engine.
//!
//! This module loads the pattern catalog (accepted shift windows per work
//! category) and the rule tables (exemption roster, category labels,
//! attendance codes) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/attendance").unwrap();
//! println!("Loaded {} patterns", loader.catalog().pattern_count());
//! ```

mod catalog;
mod loader;
mod rules;
mod types;

pub use catalog::{HOLIDAY_PATTERN_LIST, OVERTIME_PATTERN_LIST, PatternCatalog};
pub use loader::ConfigLoader;
pub use rules::{AttendanceCodeRule, AttendanceRules};
pub use types::{AttendanceCodeEntry, CategoryLabels, PatternEntry, PatternFile, RulesFile};
