//! Query sets: sorted report views ready for table rendering.
//!
//! The data pipeline is:
//! 1. Raw Data (CountResult)
//! 2. QuerySet (labeled, sorted, percentages computed)
//! 3. ReportTable (formatted strings for display)

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::data::stats::CountResult;

use super::options::FileLabel;

/// One row of the per-file view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    /// Relative path or bare file name, depending on [`FileLabel`]
    pub label: String,
    pub lines: u64,
    /// Language name, or the raw extension when unmapped
    pub category: String,
}

/// One row of the per-category view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub category: String,
    pub lines: u64,
    /// Share of the grand total, rounded to two decimals (0 when the total is 0)
    pub percentage: f64,
}

/// Per-file view: rows sorted by lines descending, then path ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQuerySet {
    pub items: Vec<FileItem>,
    pub total: u64,
}

/// Per-category view: rows sorted by lines descending, then category ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryQuerySet {
    pub items: Vec<CategoryItem>,
    pub total: u64,
}

impl FileQuerySet {
    /// Build the per-file view from a CountResult.
    pub fn from_result(result: &CountResult, label: FileLabel) -> Self {
        let mut files: Vec<_> = result.files.iter().collect();
        files.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path)));

        let items = files
            .into_iter()
            .map(|f| FileItem {
                label: match label {
                    FileLabel::Relative => f.relative_path(&result.root),
                    FileLabel::Short => f.file_name(),
                },
                lines: f.lines,
                category: f.language.clone(),
            })
            .collect();

        FileQuerySet {
            items,
            total: result.total,
        }
    }
}

impl CategoryQuerySet {
    /// Build the per-category view from a CountResult.
    pub fn from_result(result: &CountResult) -> Self {
        let mut items: Vec<CategoryItem> = result
            .categories
            .iter()
            .map(|c| CategoryItem {
                category: c.category.clone(),
                lines: c.lines,
                percentage: percentage(c.lines, result.total),
            })
            .collect();

        items.sort_by(|a, b| {
            Reverse(a.lines)
                .cmp(&Reverse(b.lines))
                .then_with(|| a.category.cmp(&b.category))
        });

        CategoryQuerySet {
            items,
            total: result.total,
        }
    }
}

/// `lines / total * 100`, rounded to two decimal places.
///
/// A zero total yields 0 rather than dividing by zero.
pub fn percentage(lines: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (lines as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
}
