//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pattern
//! catalog and rule tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{TimePattern, WorkCategory, parse_time_of_day};

use super::catalog::{HOLIDAY_PATTERN_LIST, OVERTIME_PATTERN_LIST};
use super::types::{AttendanceCodeEntry, PatternEntry, PatternFile, RulesFile};
use super::{AttendanceCodeRule, AttendanceRules, PatternCatalog};

/// Loads and provides access to the pattern catalog.
///
/// # Directory Structure
///
/// ```text
/// config/attendance/
/// ├── patterns.yaml   # holidaywork_patterns and overtime_patterns
/// └── rules.yaml      # exemption roster, category labels, attendance codes
/// ```
///
/// Loading is all-or-nothing: any missing file, parse error, missing pattern
/// list or invalid entry fails the whole load. There is no partial catalog.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::models::WorkCategory;
///
/// let loader = ConfigLoader::load("./config/attendance")?;
/// let overtime = loader.catalog().patterns_for(WorkCategory::Overtime);
/// println!("{} overtime patterns", overtime.len());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: PatternCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/attendance")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `patterns.yaml` or `rules.yaml` is missing or unreadable
    /// - either file is not valid YAML (JSON bodies are accepted)
    /// - either pattern list is absent
    /// - a pattern or rule entry is invalid
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let patterns_path = path.join("patterns.yaml");
        let pattern_file = Self::load_yaml::<PatternFile>(&patterns_path)?;

        let rules_path = path.join("rules.yaml");
        let rules_file = Self::load_yaml::<RulesFile>(&rules_path)?;

        let patterns_path_str = patterns_path.display().to_string();
        let holiday_entries =
            pattern_file
                .holidaywork_patterns
                .ok_or_else(|| EngineError::MissingPatternList {
                    path: patterns_path_str.clone(),
                    list: HOLIDAY_PATTERN_LIST.to_string(),
                })?;
        let overtime_entries =
            pattern_file
                .overtime_patterns
                .ok_or_else(|| EngineError::MissingPatternList {
                    path: patterns_path_str,
                    list: OVERTIME_PATTERN_LIST.to_string(),
                })?;

        let holiday_patterns =
            Self::build_patterns(HOLIDAY_PATTERN_LIST, WorkCategory::HolidayWork, holiday_entries)?;
        let overtime_patterns =
            Self::build_patterns(OVERTIME_PATTERN_LIST, WorkCategory::Overtime, overtime_entries)?;
        let rules = Self::build_rules(rules_file)?;

        let catalog = PatternCatalog::new(holiday_patterns, overtime_patterns, rules)?;

        info!(
            config_dir = %path.display(),
            holiday_patterns = catalog.patterns_for(WorkCategory::HolidayWork).len(),
            overtime_patterns = catalog.patterns_for(WorkCategory::Overtime).len(),
            exempt_employees = catalog.rules().exempt_employees().len(),
            "Pattern catalog loaded"
        );

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Turns raw entries into patterns, keeping declaration order.
    fn build_patterns(
        list: &str,
        category: WorkCategory,
        entries: Vec<PatternEntry>,
    ) -> EngineResult<Vec<TimePattern>> {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let invalid = |message: String| EngineError::InvalidPattern {
                    list: list.to_string(),
                    index,
                    message,
                };

                let start = parse_time_of_day(&entry.start)
                    .ok_or_else(|| invalid(format!("invalid start time '{}'", entry.start)))?;
                let end = parse_time_of_day(&entry.end)
                    .ok_or_else(|| invalid(format!("invalid end time '{}'", entry.end)))?;
                if entry.work_times.is_empty() {
                    return Err(invalid("work_times is empty".to_string()));
                }

                Ok(TimePattern::new(
                    category,
                    start,
                    end,
                    entry.work_times,
                    entry.duration,
                ))
            })
            .collect()
    }

    fn build_rules(file: RulesFile) -> EngineResult<AttendanceRules> {
        let codes = file
            .attendance_codes
            .into_iter()
            .map(Self::build_code_rule)
            .collect::<EngineResult<Vec<_>>>()?;

        AttendanceRules::new(
            file.exempt_employees,
            file.category_labels.holiday_work,
            file.category_labels.overtime,
            codes,
        )
    }

    fn build_code_rule(entry: AttendanceCodeEntry) -> EngineResult<AttendanceCodeRule> {
        let parse = |value: Option<String>, field: &str| -> EngineResult<_> {
            match value {
                None => Ok(None),
                Some(text) => parse_time_of_day(&text).map(Some).ok_or_else(|| {
                    EngineError::InvalidRules {
                        message: format!(
                            "attendance code '{}' has invalid {} time '{}'",
                            entry.code, field, text
                        ),
                    }
                }),
            }
        };

        let start = parse(entry.start.clone(), "start")?;
        let end = parse(entry.end.clone(), "end")?;
        if entry.code.trim().is_empty() {
            return Err(EngineError::InvalidRules {
                message: "attendance code must not be empty".to_string(),
            });
        }

        Ok(AttendanceCodeRule {
            code: entry.code.trim().to_string(),
            category: entry.category,
            start,
            end,
        })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> PatternCatalog {
        self.catalog
    }
}
