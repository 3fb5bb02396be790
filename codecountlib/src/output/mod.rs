//! Output formatting: present data as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting query sets for display. It provides:
//!
//! - **ReportTable**: headers and rows as display strings
//! - **Report**: the requested tables, the grand total and diagnostics
//!
//! Nothing here prints; rendering to a terminal is left to the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use codecountlib::output::Report;
//!
//! let report = Report::from_result(&result, Views::default(), FileLabel::Relative);
//! // report.summary: Some(ReportTable { headers: ["Language / File Type", ...], rows: [...] })
//! // report.total_line: "Total Lines of code: 1234"
//! ```

pub mod report;
pub mod table;

pub use report::Report;
pub use table::{
    format_percentage, total_line, ReportTable, TableRow, FILE_HEADERS, SUMMARY_HEADERS,
};
