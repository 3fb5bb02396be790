//! Core data structures for a counting run.
//!
//! A run produces one [`FileRecord`] per counted file and one
//! [`CategoryTotal`] per language (or raw extension, for files no language
//! claims). [`CountResult`] owns both plus the grand total, and keeps the
//! three in agreement: every line added to a file is added to its category
//! and to the total.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{serialize_path_lossy, Diagnostic};

/// Line count for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path to the file, as discovered
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Extension as found on disk, without the dot
    pub extension: String,
    /// Resolved category: language name, or the extension when unmapped
    pub language: String,
    /// Significant lines
    pub lines: u64,
}

impl FileRecord {
    pub fn new(
        path: PathBuf,
        extension: impl Into<String>,
        language: impl Into<String>,
        lines: u64,
    ) -> Self {
        Self {
            path,
            extension: extension.into(),
            language: language.into(),
            lines,
        }
    }

    /// Path relative to `root`, falling back to the full path.
    pub fn relative_path(&self, root: &Path) -> String {
        self.path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| self.path.to_string_lossy().to_string())
    }

    /// Bare file name, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}

/// Aggregated line count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Language name or raw extension
    pub category: String,
    /// Sum of significant lines over the category's files
    pub lines: u64,
    /// Number of files in the category
    pub file_count: usize,
}

impl CategoryTotal {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            lines: 0,
            file_count: 0,
        }
    }
}

/// Result of counting a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// Root the run was started from
    #[serde(serialize_with = "serialize_path_lossy")]
    pub root: PathBuf,
    /// One record per counted file, in discovery order
    pub files: Vec<FileRecord>,
    /// One total per category, in first-seen order
    pub categories: Vec<CategoryTotal>,
    /// Sum of significant lines over all files
    pub total: u64,
    /// Problems that were skipped over
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    category_slots: HashMap<String, usize>,
}

impl CountResult {
    /// Create a new empty result for a root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Record a counted file, updating its category and the grand total.
    pub fn add_file(&mut self, record: FileRecord) {
        let slot = match self.category_slots.get(&record.language) {
            Some(&slot) => slot,
            None => {
                self.categories
                    .push(CategoryTotal::new(record.language.clone()));
                let slot = self.categories.len() - 1;
                self.category_slots.insert(record.language.clone(), slot);
                slot
            }
        };

        let category = &mut self.categories[slot];
        category.lines += record.lines;
        category.file_count += 1;
        self.total += record.lines;
        self.files.push(record);
    }

    /// Record a non-fatal problem.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Total for a category, if any file fell into it.
    pub fn category(&self, name: &str) -> Option<&CategoryTotal> {
        self.category_slots
            .get(name)
            .map(|&slot| &self.categories[slot])
    }

    /// Number of files counted.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
