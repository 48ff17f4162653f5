//! A labelled table of text cells, and its CSV encoding.

use std::io;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Rows of text cells under a header of column labels.
///
/// Labels are not required to be unique; [`Table::dedup_columns`] collapses
/// repeated labels. Every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given header.
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding with empty cells or cutting extra cells so it
    /// matches the header width.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Column labels in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of the first column with this label.
    pub fn column(&self, label: &str) -> Option<Vec<&str>> {
        let index = self.columns.iter().position(|c| c == label)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Stacks tables vertically, aligning columns by label.
    ///
    /// The result's header is the union of all headers in first-seen order.
    /// A label repeated within one table maps to as many result columns as its
    /// largest repeat count; the n-th occurrence in a table lands in the n-th
    /// result column with that label. Cells a table lacks are left empty.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::report::Table;
    ///
    /// let mut first = Table::new(["name", "status"]);
    /// first.push_row(["Kim", "eligible"]);
    /// let mut second = Table::new(["status", "code"]);
    /// second.push_row(["exempt by roster", "900"]);
    ///
    /// let merged = Table::concat([first, second]);
    /// assert_eq!(merged.columns(), ["name", "status", "code"]);
    /// assert_eq!(merged.rows()[1], ["", "exempt by roster", "900"]);
    /// ```
    pub fn concat<I>(tables: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        let tables: Vec<Table> = tables.into_iter().collect();

        let mut header: Vec<(String, usize)> = Vec::new();
        for table in &tables {
            for key in occurrence_keys(&table.columns) {
                if !header.contains(&key) {
                    header.push(key);
                }
            }
        }

        let mut merged = Table::new(header.iter().map(|(label, _)| label.clone()));
        for table in tables {
            let targets: Vec<usize> = occurrence_keys(&table.columns)
                .iter()
                .filter_map(|key| header.iter().position(|h| h == key))
                .collect();

            for row in table.rows {
                let mut aligned = vec![String::new(); header.len()];
                for (cell, &target) in row.into_iter().zip(&targets) {
                    aligned[target] = cell;
                }
                merged.rows.push(aligned);
            }
        }
        merged
    }

    /// Drops every column whose label already appeared to its left.
    ///
    /// The first occurrence of each label is kept. Dropped labels are logged
    /// at `warn`.
    pub fn dedup_columns(self) -> Table {
        let mut keep = Vec::with_capacity(self.columns.len());
        let mut dropped = Vec::new();
        for (index, label) in self.columns.iter().enumerate() {
            if self.columns[..index].contains(label) {
                dropped.push(label.clone());
            } else {
                keep.push(index);
            }
        }

        if dropped.is_empty() {
            return self;
        }
        warn!(dropped = ?dropped, "Duplicate column labels dropped");

        Table {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .into_iter()
                .map(|mut row| keep.iter().map(|&i| std::mem::take(&mut row[i])).collect())
                .collect(),
        }
    }

    /// Stacks per-document tables into one, keeping a single column per label.
    ///
    /// Equivalent to [`Table::concat`] followed by [`Table::dedup_columns`].
    pub fn consolidate<I>(tables: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        Table::concat(tables).dedup_columns()
    }

    /// Writes the header and rows as CSV.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the table to a CSV file, replacing any existing file.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| EngineError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        self.write_csv(file).map_err(|e| EngineError::from_csv(path, e))
    }
}

/// Pairs each label with how many times it appeared before in the same header.
fn occurrence_keys(columns: &[String]) -> Vec<(String, usize)> {
    columns
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let seen = columns[..index].iter().filter(|c| *c == label).count();
            (label.clone(), seen)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(columns.iter().copied());
        for row in rows {
            t.push_row(row.iter().copied());
        }
        t
    }

    #[test]
    fn test_push_row_fits_header_width() {
        let t = table(&["a", "b", "c"], &[&["1"], &["1", "2", "3", "4"]]);
        assert_eq!(t.rows()[0], ["1", "", ""]);
        assert_eq!(t.rows()[1], ["1", "2", "3"]);
    }

    #[test]
    fn test_concat_aligns_by_label() {
        let first = table(&["name", "start", "end"], &[&["Kim", "17:30", "19:30"]]);
        let second = table(&["end", "name"], &[&["22:00", "Lee"]]);

        let merged = Table::concat([first, second]);
        assert_eq!(merged.columns(), ["name", "start", "end"]);
        assert_eq!(merged.rows()[0], ["Kim", "17:30", "19:30"]);
        assert_eq!(merged.rows()[1], ["Lee", "", "22:00"]);
    }

    #[test]
    fn test_concat_keeps_repeated_labels_apart() {
        let first = table(&["name", "time", "time"], &[&["Kim", "08:30", "17:30"]]);
        let second = table(&["time", "name"], &[&["22:00", "Lee"]]);

        let merged = Table::concat([first, second]);
        assert_eq!(merged.columns(), ["name", "time", "time"]);
        assert_eq!(merged.rows()[1], ["Lee", "22:00", ""]);
    }

    #[test]
    fn test_concat_of_nothing_is_empty() {
        let merged = Table::concat(Vec::new());
        assert!(merged.columns().is_empty());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let t = table(
            &["name", "time", "status", "time", "name"],
            &[&["Kim", "08:30", "eligible", "17:30", "Kim Minjun"]],
        );

        let deduped = t.dedup_columns();
        assert_eq!(deduped.columns(), ["name", "time", "status"]);
        assert_eq!(deduped.rows()[0], ["Kim", "08:30", "eligible"]);
    }

    #[test]
    fn test_dedup_without_duplicates_is_identity() {
        let t = table(&["a", "b"], &[&["1", "2"]]);
        assert_eq!(t.clone().dedup_columns(), t);
    }

    #[test]
    fn test_consolidate_collapses_labels_repeated_in_a_later_table() {
        let first = table(&["name", "status"], &[&["Kim", "eligible"]]);
        let second = table(&["name", "time", "time"], &[&["Lee", "08:30", "17:30"]]);

        let merged = Table::consolidate([first, second]);
        assert_eq!(merged.columns(), ["name", "status", "time"]);
        assert_eq!(merged.rows()[0], ["Kim", "eligible", ""]);
        assert_eq!(merged.rows()[1], ["Lee", "", "08:30"]);
    }

    #[test]
    fn test_column_lookup() {
        let t = table(&["name", "status"], &[&["Kim", "eligible"], &["Lee", "exempt"]]);
        assert_eq!(t.column("status"), Some(vec!["eligible", "exempt"]));
        assert_eq!(t.column("missing"), None);
    }

    #[test]
    fn test_write_csv_quotes_when_needed() {
        let t = table(
            &["name", "status"],
            &[&["Kim", "pattern mismatch (start mismatch, code mismatch)"]],
        );
        let mut out = Vec::new();
        t.write_csv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "name,status\nKim,\"pattern mismatch (start mismatch, code mismatch)\"\n"
        );
    }

    #[test]
    fn test_save_csv_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");

        let err = table(&["a"], &[]).save_csv(&path).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[test]
    fn test_save_csv_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        table(&["휴일근무", "status"], &[&["8", "eligible"]])
            .save_csv(&path)
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "휴일근무,status\n8,eligible\n");
    }
}
