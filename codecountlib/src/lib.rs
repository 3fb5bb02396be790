//! # codecountlib
//!
//! A lines of code counter library that classifies files by extension and
//! counts lines that are neither blank nor comments.
//!
//! ## Overview
//!
//! A run goes through four stages:
//!
//! - **Source**: load the extension → language table and find matching files
//! - **Data**: count significant lines per file and total them per language
//! - **Query**: sort the per-file and per-language views, compute percentages
//! - **Output**: format the views as string tables
//!
//! ## Counting rule
//!
//! After trimming, a line is skipped if it is empty or starts with one of
//! `///`, `//`, `/*`, `*/`, `-->`, `<!--`, `#` or `*`. Everything else counts.
//! This is a heuristic shared by every language, not a parser: lines inside a
//! block comment are only skipped if they start with a marker themselves.
//!
//! ## Failure handling
//!
//! Unreadable directories and files do not stop a run. They are returned as
//! [`Diagnostic`]s next to the counts. Only a missing root, a bad exclude
//! pattern or a broken language table produce a [`CodecountError`].
//!
//! ## Example
//!
//! ```rust
//! use codecountlib::{count_directory, CategoryQuerySet, ExtensionIndex, FilterConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.py"), "import os\n\n# cwd\nprint(os.getcwd())\nos.sep\n").unwrap();
//! fs::write(dir.path().join("b.js"), "let x = 1;\nlet y = 2;\n").unwrap();
//!
//! let index = ExtensionIndex::builtin().unwrap();
//! let result = count_directory(dir.path(), &index, &FilterConfig::new()).unwrap();
//! assert_eq!(result.total, 5);
//!
//! let summary = CategoryQuerySet::from_result(&result);
//! assert_eq!(summary.items[0].category, "Python");
//! assert_eq!(summary.items[0].percentage, 60.0);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    count_directory, count_file, count_significant_lines, is_significant_line, CategoryTotal,
    CountResult, FileRecord, LineCount,
};
pub use error::{CodecountError, Diagnostic, DiagnosticKind};
pub use output::{Report, ReportTable, TableRow};
pub use query::{CategoryQuerySet, FileLabel, FileQuerySet, Views};
pub use source::{
    discover_files, Discovery, ExtensionFilter, ExtensionIndex, FilterConfig, LanguageEntry,
};

/// Result type for codecountlib operations
pub type Result<T> = std::result::Result<T, CodecountError>;
