//! Raw table normalization.
//!
//! Turns the loosely-structured grids scraped from timesheet documents into
//! typed [`crate::models::AttendanceRequest`] values. This is the only place
//! that reads cells by position.

mod batch;
mod csv_source;
mod grid;

pub use batch::{DocumentSummary, NormalizedBatch, normalize_documents};
pub use csv_source::read_grid_csv;
pub use grid::{
    BLOCK_ROWS, BlockDefect, GridOutcome, HEADER_ROWS, LOWER_ROW_CELLS, RawGrid,
    UPPER_ROW_CELLS, is_blank_row, normalize_grid,
};
