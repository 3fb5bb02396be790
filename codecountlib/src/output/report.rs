//! The complete report for one run.

use serde::Serialize;

use crate::data::stats::CountResult;
use crate::error::Diagnostic;
use crate::query::options::{FileLabel, Views};
use crate::query::queryset::{CategoryQuerySet, FileQuerySet};

use super::table::{total_line, ReportTable};

/// Requested tables plus the grand total and any diagnostics.
///
/// This is what the CLI renders, and what it serializes in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Per-file table, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<ReportTable>,
    /// Per-category table, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ReportTable>,
    pub file_count: usize,
    pub total: u64,
    /// `Total Lines of code: <n>`
    pub total_line: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn from_result(result: &CountResult, views: Views, label: FileLabel) -> Self {
        let files = views
            .files
            .then(|| ReportTable::from_file_queryset(&FileQuerySet::from_result(result, label)));
        let summary = views
            .summary
            .then(|| ReportTable::from_category_queryset(&CategoryQuerySet::from_result(result)));

        Report {
            files,
            summary,
            file_count: result.file_count(),
            total: result.total,
            total_line: total_line(result.total),
            diagnostics: result.diagnostics.clone(),
        }
    }
}
