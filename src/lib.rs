//! Attendance Eligibility Engine
//!
//! This crate decides whether holiday-work and overtime timesheet lines
//! qualify for paid-duration categories. Raw grids scraped from submitted
//! documents are normalized into typed requests, matched against a catalog of
//! accepted shift patterns (with the overnight exceptions for shifts that
//! cross midnight), and projected back into result rows and tables.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod report;
