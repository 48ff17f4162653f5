//! Reconstructing timesheet lines from one document's raw grid.
//!
//! The scraped table has three header rows followed by three-row blocks:
//!
//! ```text
//! upper:  No | category | department | name | start | code | clock-in | work date | compensation | description
//! lower:  employee id | end | clock-out
//! blank separator
//! ```
//!
//! Parsing stops at the first block whose upper row is entirely empty. A
//! non-empty upper row at the very end of the grid is a defect.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AttendanceRequest, TimeCell};

/// Header rows preceding the first block.
pub const HEADER_ROWS: usize = 3;

/// Rows per block (upper, lower, separator).
pub const BLOCK_ROWS: usize = 3;

/// Cells required in a block's upper row.
pub const UPPER_ROW_CELLS: usize = 10;

/// Cells required in a block's lower row.
pub const LOWER_ROW_CELLS: usize = 3;

/// The raw text grid scraped from one source document, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawGrid {
    /// Identifier of the source document.
    pub document_id: String,
    /// Rows of cell text. Rows may have different lengths.
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    /// Creates a grid from anything that yields rows of cell text.
    pub fn new<R, C>(document_id: impl Into<String>, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            document_id: document_id.into(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

/// Why block parsing stopped before reaching the end-of-table marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockDefect {
    /// The upper row of a block has too few cells.
    ShortUpperRow {
        /// Grid row index of the upper row.
        row: usize,
        /// Number of cells found.
        cells: usize,
    },
    /// The lower row of a block has too few cells.
    ShortLowerRow {
        /// Grid row index of the lower row.
        row: usize,
        /// Number of cells found.
        cells: usize,
    },
    /// The grid ends right after a non-empty upper row.
    MissingLowerRow {
        /// Grid row index of the upper row.
        row: usize,
    },
}

impl std::fmt::Display for BlockDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockDefect::ShortUpperRow { row, cells } => write!(
                f,
                "row {} has {} cells, expected at least {}",
                row, cells, UPPER_ROW_CELLS
            ),
            BlockDefect::ShortLowerRow { row, cells } => write!(
                f,
                "row {} has {} cells, expected at least {}",
                row, cells, LOWER_ROW_CELLS
            ),
            BlockDefect::MissingLowerRow { row } => write!(f, "row {} has no lower row", row),
        }
    }
}

/// Lines reconstructed from one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOutcome {
    /// Identifier of the source document.
    pub document_id: String,
    /// Reconstructed lines in grid order.
    pub requests: Vec<AttendanceRequest>,
    /// Set when a malformed block stopped parsing early.
    pub defect: Option<BlockDefect>,
}

/// Returns true when every cell of the row is blank.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Reconstructs the timesheet lines of one grid.
///
/// A grid without any block (no timesheet table, or headers only) yields no
/// lines; that is not an error. A malformed block stops parsing for this grid
/// only, keeping the lines read before it.
///
/// # Example
///
/// ```
/// use attendance_engine::normalizer::{RawGrid, normalize_grid};
///
/// let grid = RawGrid::new("DOC-1", vec![
///     vec!["header"], vec!["header"], vec!["header"],
///     vec!["1", "시간외근무", "Assembly", "Kim Minjun", "17:30", "3:00", "08:25", "2025.04.09", "pay", "line stop"],
///     vec!["20231145", "20:30", "20:41"],
///     vec![],
/// ]);
///
/// let outcome = normalize_grid(&grid);
/// assert_eq!(outcome.requests.len(), 1);
/// assert_eq!(outcome.requests[0].employee_id, "20231145");
/// assert!(outcome.defect.is_none());
/// ```
pub fn normalize_grid(grid: &RawGrid) -> GridOutcome {
    let mut requests = Vec::new();
    let mut defect = None;
    let mut row_idx = HEADER_ROWS;

    while let Some(upper) = grid.rows.get(row_idx) {
        if is_blank_row(upper) {
            break;
        }

        let block = match grid.rows.get(row_idx + 1) {
            Some(lower) => read_block(&grid.document_id, row_idx, upper, lower),
            None => Err(BlockDefect::MissingLowerRow { row: row_idx }),
        };

        match block {
            Ok(request) => requests.push(request),
            Err(found) => {
                warn!(
                    document_id = %grid.document_id,
                    defect = %found,
                    parsed = requests.len(),
                    "Malformed block, remaining rows of this document skipped"
                );
                defect = Some(found);
                break;
            }
        }

        row_idx += BLOCK_ROWS;
    }

    GridOutcome {
        document_id: grid.document_id.clone(),
        requests,
        defect,
    }
}

fn read_block(
    document_id: &str,
    row_idx: usize,
    upper: &[String],
    lower: &[String],
) -> Result<AttendanceRequest, BlockDefect> {
    if upper.len() < UPPER_ROW_CELLS {
        return Err(BlockDefect::ShortUpperRow {
            row: row_idx,
            cells: upper.len(),
        });
    }
    if lower.len() < LOWER_ROW_CELLS {
        return Err(BlockDefect::ShortLowerRow {
            row: row_idx + 1,
            cells: lower.len(),
        });
    }

    let text = |cell: &String| cell.trim().to_string();

    Ok(AttendanceRequest {
        document_id: document_id.to_string(),
        line_no: text(&upper[0]),
        category: text(&upper[1]),
        department: text(&upper[2]),
        employee_name: text(&upper[3]),
        start: TimeCell::new(upper[4].as_str()),
        requested_code: text(&upper[5]),
        clock_in: TimeCell::new(upper[6].as_str()),
        work_date: text(&upper[7]),
        compensation_type: text(&upper[8]),
        description: text(&upper[9]),
        employee_id: text(&lower[0]),
        end: TimeCell::new(lower[1].as_str()),
        clock_out: TimeCell::new(lower[2].as_str()),
    })
}
