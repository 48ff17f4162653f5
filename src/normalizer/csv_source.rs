//! Reading raw grids from headerless CSV exports.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{EngineError, EngineResult};

use super::grid::RawGrid;

/// Reads one document's grid from a CSV file.
///
/// Every line becomes a row, including the header rows of the scraped table.
/// Rows may have different lengths, and an empty line is an empty row, so the
/// blank separators and end-of-table marker survive. The document id is the
/// file stem, so `exports/GW-2025-0413.csv` yields `GW-2025-0413`.
pub fn read_grid_csv<P: AsRef<Path>>(path: P) -> EngineResult<RawGrid> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| EngineError::from_csv(path, e.into()))?;
    let rows = read_rows(&bytes).map_err(|e| EngineError::from_csv(path, e))?;

    let document_id = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(RawGrid { document_id, rows })
}

/// Parses CSV text into rows, restoring the empty lines the reader skips.
fn read_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let offset = record.position().map_or(0, |p| p.byte() as usize);

        let skipped = empty_lines_before(bytes, offset, rows.is_empty());
        rows.extend(std::iter::repeat_with(Vec::new).take(skipped));
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

/// Counts the empty lines around the offset the reader reports for a record.
///
/// Depending on the reader state the offset lands either before the skipped
/// lines or after them, so terminators are counted in both directions. Looking
/// back, the first terminator belongs to the previous record.
fn empty_lines_before(bytes: &[u8], offset: usize, first_record: bool) -> usize {
    let offset = offset.min(bytes.len());

    // A CRLF split by the offset is still the previous record's terminator.
    let mut ahead = offset;
    if offset > 0 && bytes[offset - 1] == b'\r' && bytes.get(offset) == Some(&b'\n') {
        ahead += 1;
    }
    let mut forward = 0;
    while let Some(&byte) = bytes.get(ahead) {
        match byte {
            b'\r' if bytes.get(ahead + 1) == Some(&b'\n') => ahead += 2,
            b'\r' | b'\n' => ahead += 1,
            _ => break,
        }
        forward += 1;
    }

    let mut behind = offset;
    let mut backward: usize = 0;
    while behind > 0 {
        match bytes[behind - 1] {
            b'\n' if behind >= 2 && bytes[behind - 2] == b'\r' => behind -= 2,
            b'\r' | b'\n' => behind -= 1,
            _ => break,
        }
        backward += 1;
    }
    if !first_record {
        backward = backward.saturating_sub(1);
    }

    forward + backward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize_grid;
    use std::io::Write;

    #[test]
    fn test_reads_ragged_rows_and_names_document_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GW-2025-0413.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "작업신청서").unwrap();
        writeln!(file, "No,구분,소속").unwrap();
        writeln!(file, "사번,종료,퇴근").unwrap();
        writeln!(
            file,
            "1,시간외근무,Assembly,Kim Minjun,00:20,1:00,10:30,2025.04.13,수당,\"line stop, restart\""
        )
        .unwrap();
        writeln!(file, "20231145,01:20,02:00").unwrap();
        writeln!(file, ",,").unwrap();
        drop(file);

        let grid = read_grid_csv(&path).unwrap();
        assert_eq!(grid.document_id, "GW-2025-0413");
        assert_eq!(grid.rows.len(), 6);
        assert_eq!(grid.rows[0].len(), 1);
        assert_eq!(grid.rows[3][9], "line stop, restart");

        let outcome = normalize_grid(&grid);
        assert_eq!(outcome.requests.len(), 1);
        assert_eq!(outcome.requests[0].end.raw(), "01:20");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_grid_csv(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    fn write_grid(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("GW-2025-0414.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    const HEADER: &str = "작업신청서\nNo,구분,소속\n사번,종료,퇴근\n";
    const BLOCK_1: &str = concat!(
        "1,시간외근무,Assembly,Kim Minjun,17:30,2:00,08:30,2025.04.14,수당,inspection\n",
        "20231145,19:30,19:40\n",
    );
    const BLOCK_2: &str = concat!(
        "2,시간외근무,Assembly,Park Jisoo,17:30,2:00,08:30,2025.04.14,수당,inspection\n",
        "20220311,19:30,19:35\n",
    );

    #[test]
    fn test_empty_lines_become_empty_rows() {
        let (_dir, path) = write_grid(&format!("{HEADER}{BLOCK_1}\n{BLOCK_2}\n"));

        let grid = read_grid_csv(&path).unwrap();
        assert_eq!(grid.rows.len(), 8);
        assert!(grid.rows[5].is_empty());

        let outcome = normalize_grid(&grid);
        let names: Vec<_> = outcome
            .requests
            .iter()
            .map(|r| r.employee_name.as_str())
            .collect();
        assert_eq!(names, vec!["Kim Minjun", "Park Jisoo"]);
        assert!(outcome.defect.is_none());
    }

    #[test]
    fn test_empty_line_ends_the_table() {
        let ghost = concat!(
            "9,시간외근무,Nowhere,Ghost Row,17:30,2:00,08:30,2025.04.14,수당,\n",
            "99999999,19:30,19:40\n",
        );
        let (_dir, path) = write_grid(&format!("{HEADER}{BLOCK_1},,\n\n\n\n{ghost}"));

        let outcome = normalize_grid(&read_grid_csv(&path).unwrap());
        assert_eq!(outcome.requests.len(), 1);
        assert_eq!(outcome.requests[0].employee_name, "Kim Minjun");
        assert!(outcome.defect.is_none());
    }

    #[test]
    fn test_crlf_and_multiline_cells_keep_row_alignment() {
        let multiline = concat!(
            "1,휴일근무,Press,Oh Seojun,08:30,8:00,08:12,2025.04.13,수당,\"mold\nchange\"\n",
            "20190077,17:30,17:42\n",
        );
        let contents = format!("{HEADER}{multiline}\n{BLOCK_2}").replace('\n', "\r\n");
        let (_dir, path) = write_grid(&contents);

        let grid = read_grid_csv(&path).unwrap();
        assert!(grid.rows[5].is_empty());

        let outcome = normalize_grid(&grid);
        assert_eq!(outcome.requests.len(), 2);
        assert_eq!(outcome.requests[0].description, "mold\r\nchange");
        assert_eq!(outcome.requests[1].employee_name, "Park Jisoo");
    }

    #[test]
    fn test_leading_empty_lines_are_rows() {
        let (_dir, path) = write_grid("\n\nNo,구분\n");
        let grid = read_grid_csv(&path).unwrap();
        assert_eq!(grid.rows.len(), 3);
        assert!(grid.rows[0].is_empty());
        assert!(grid.rows[1].is_empty());
        assert_eq!(grid.rows[2], vec!["No", "구분"]);
    }
}
