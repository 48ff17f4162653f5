//! Result projection and tabular output.
//!
//! Decisions are flattened back onto the submitted lines as [`ResultRow`]s,
//! which serialize to JSON for the HTTP API and to a [`Table`] for CSV export.

mod projector;
mod table;

pub use projector::{
    ATTENDANCE_CODE_COLUMN, REQUEST_COLUMNS, ResultRow, STATUS_COLUMN, project, result_columns,
    result_table,
};
pub use table::Table;
