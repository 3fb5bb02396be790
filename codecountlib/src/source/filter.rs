//! File filtering and discovery.
//!
//! This module decides which files a run looks at: an [`ExtensionFilter`]
//! parsed from the user's query, optional glob exclude patterns, and a
//! deterministic recursive walk that records unreadable entries instead of
//! giving up on them.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{CodecountError, Diagnostic};
use crate::Result;

use super::languages::{normalize_extension, ExtensionIndex};

/// Which extensions a run should count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtensionFilter {
    /// Every extension the classifier knows about
    #[default]
    All,
    /// Only these extensions (normalized: lowercase, no leading dot)
    Only(BTreeSet<String>),
}

impl ExtensionFilter {
    /// Parse a comma-separated query such as `".cs, .py,js"`.
    ///
    /// Empty or whitespace-only input means [`ExtensionFilter::All`], as does
    /// a query made only of separators. Unknown tokens are kept verbatim; they
    /// simply match nothing if no file carries that extension.
    pub fn parse(query: &str) -> Self {
        let extensions: BTreeSet<String> = query
            .split(',')
            .map(normalize_extension)
            .filter(|ext| !ext.is_empty())
            .collect();

        if extensions.is_empty() {
            ExtensionFilter::All
        } else {
            ExtensionFilter::Only(extensions)
        }
    }

    /// Filter for an explicit list of extensions.
    pub fn only(extensions: &[&str]) -> Self {
        Self::parse(&extensions.join(","))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ExtensionFilter::All)
    }

    /// Check a file's extension against the filter.
    ///
    /// The comparison is exact: query tokens are lowercase, and a file's
    /// extension is taken as found on disk.
    pub fn matches(&self, ext: &str, index: &ExtensionIndex) -> bool {
        match self {
            ExtensionFilter::All => index.is_known(ext),
            ExtensionFilter::Only(set) => set.contains(ext),
        }
    }
}

impl From<&str> for ExtensionFilter {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Extensions to count
    pub extensions: ExtensionFilter,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a filter that counts every known extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension filter.
    pub fn extensions(mut self, extensions: ExtensionFilter) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the extension filter from a comma-separated query.
    pub fn query(self, query: &str) -> Self {
        self.extensions(ExtensionFilter::parse(query))
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| CodecountError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. It has an extension accepted by the extension filter
    /// 2. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path, index: &ExtensionIndex) -> bool {
        let Some(ext) = file_extension(path) else {
            return false;
        };

        if !self.extensions.matches(&ext, index) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.exclude.iter().any(|pattern| pattern.matches(&path_str))
    }
}

/// The extension of a path as it appears on disk, without the dot.
///
/// Case is preserved so that `A.PY` does not pass a `py` filter. Dotfiles
/// such as `.bashrc` have no extension.
pub fn file_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy().into_owned();
    (!ext.is_empty()).then_some(ext)
}

/// Files found by a walk, plus whatever could not be read along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Matching files, sorted by path
    pub files: Vec<PathBuf>,
    /// Unreadable directories, broken links and filesystem loops
    pub diagnostics: Vec<Diagnostic>,
}

/// Discover files under `root` that pass `filter`.
///
/// Directories are walked depth-first in file-name order, following symbolic
/// links. A directory that cannot be read, a dangling link or a link back to
/// an ancestor directory is recorded as a diagnostic and the walk carries on
/// with the remaining entries.
pub fn discover_files(
    root: impl AsRef<Path>,
    filter: &FilterConfig,
    index: &ExtensionIndex,
) -> Result<Discovery> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(CodecountError::PathNotFound(root.to_path_buf()));
    }

    let mut discovery = Discovery::default();

    if root.is_file() {
        if filter.matches(root, index) {
            discovery.files.push(root.to_path_buf());
        }
        return Ok(discovery);
    }

    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                let message = match (err.loop_ancestor(), err.io_error()) {
                    (Some(ancestor), _) => {
                        format!("filesystem loop back to '{}'", ancestor.display())
                    }
                    (None, Some(io)) => io.to_string(),
                    (None, None) => err.to_string(),
                };
                let diagnostic = Diagnostic::discovery(path, message);
                log::warn!("{}", diagnostic);
                discovery.diagnostics.push(diagnostic);
                continue;
            }
        };

        if entry.file_type().is_file() && filter.matches(entry.path(), index) {
            discovery.files.push(entry.into_path());
        }
    }

    // Sort for deterministic output
    discovery.files.sort();
    log::debug!(
        "discovered {} files under {}",
        discovery.files.len(),
        root.display()
    );

    Ok(discovery)
}
