//! Options controlling which report views are built and how files are labeled.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which report views to produce.
///
/// By default only the per-category summary is shown; the per-file view is
/// opt-in because it grows with the size of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Views {
    /// Per-file table
    pub files: bool,
    /// Per-category summary table
    pub summary: bool,
}

impl Default for Views {
    fn default() -> Self {
        Self {
            files: false,
            summary: true,
        }
    }
}

impl Views {
    /// No views at all; only the grand total is reported.
    pub fn none() -> Self {
        Self {
            files: false,
            summary: false,
        }
    }

    /// Both views.
    pub fn everything() -> Self {
        Self {
            files: true,
            summary: true,
        }
    }

    /// Builder: set the per-file view
    pub fn with_files(mut self, enabled: bool) -> Self {
        self.files = enabled;
        self
    }

    /// Builder: set the summary view
    pub fn with_summary(mut self, enabled: bool) -> Self {
        self.summary = enabled;
        self
    }
}

/// How a file is named in the per-file view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FileLabel {
    /// Path relative to the scanned folder
    #[default]
    Relative,
    /// File name only
    Short,
}

impl FileLabel {
    pub fn from_short(short: bool) -> Self {
        if short {
            FileLabel::Short
        } else {
            FileLabel::Relative
        }
    }
}

impl FromStr for FileLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relative" | "path" => Ok(FileLabel::Relative),
            "short" | "name" => Ok(FileLabel::Short),
            _ => Err(format!("Unknown file label: {}", s)),
        }
    }
}
