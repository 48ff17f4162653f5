//! Application state for the Attendance Eligibility Engine API.

use std::sync::Arc;

use crate::config::PatternCatalog;

/// Shared application state.
///
/// Holds the pattern catalog, loaded once at startup and shared read-only by
/// every handler.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<PatternCatalog>,
}

impl AppState {
    /// Creates a new application state around a loaded catalog.
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns the pattern catalog.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }
}
