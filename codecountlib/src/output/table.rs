//! Table-ready data structures for report output.
//!
//! `ReportTable` is a pure presentation layer: it formats already-sorted
//! query sets into strings, without filtering or reordering anything.

use serde::{Deserialize, Serialize};

use crate::query::queryset::{CategoryQuerySet, FileQuerySet};

/// Column headers of the per-file table.
pub const FILE_HEADERS: [&str; 3] = ["File Name", "Lines of Code", "File Type"];

/// Column headers of the per-category table.
pub const SUMMARY_HEADERS: [&str; 3] = [
    "Language / File Type",
    "Lines of code",
    "Percentage of total",
];

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (file name or category)
    pub label: String,
    /// Remaining cells, as strings ready for display
    pub values: Vec<String>,
}

/// Table-ready report data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Column headers, label column first
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
}

impl ReportTable {
    /// Per-file table: name, line count, category.
    pub fn from_file_queryset(qs: &FileQuerySet) -> Self {
        let rows = qs
            .items
            .iter()
            .map(|item| TableRow {
                label: item.label.clone(),
                values: vec![item.lines.to_string(), item.category.clone()],
            })
            .collect();

        ReportTable {
            headers: FILE_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    /// Per-category table: category, line count, share of the total.
    pub fn from_category_queryset(qs: &CategoryQuerySet) -> Self {
        let rows = qs
            .items
            .iter()
            .map(|item| TableRow {
                label: item.category.clone(),
                values: vec![item.lines.to_string(), format_percentage(item.percentage)],
            })
            .collect();

        ReportTable {
            headers: SUMMARY_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    /// Width of each column: the longest of the header and every cell.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();

        for row in &self.rows {
            let cells = std::iter::once(&row.label).chain(row.values.iter());
            for (i, cell) in cells.enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        widths
    }
}

/// Format a percentage with a `.` decimal point and no trailing zeros.
///
/// `100.0` becomes `100%`, `12.5` becomes `12.5%`, `33.33` stays `33.33%`.
pub fn format_percentage(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

/// The line printed after the tables.
pub fn total_line(total: u64) -> String {
    format!("Total Lines of code: {}", total)
}
