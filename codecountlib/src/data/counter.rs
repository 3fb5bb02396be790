//! High-level counting API.
//!
//! This module ties the pipeline together: discover files under a root,
//! count each one, and fold the results into a [`CountResult`].

use std::path::{Path, PathBuf};

use crate::error::Diagnostic;
use crate::source::filter::{discover_files, file_extension, FilterConfig};
use crate::source::languages::ExtensionIndex;
use crate::Result;

use super::lines::{count_significant_lines, LineCount};
use super::stats::{CountResult, FileRecord};

/// Count significant lines in every matching file under `path`.
///
/// Discovery and counting run one file at a time. Unreadable directories and
/// files end up in [`CountResult::diagnostics`]; only a missing root aborts.
///
/// # Example
///
/// ```rust
/// use codecountlib::{count_directory, ExtensionIndex, FilterConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.py"), "# setup\nimport os\nprint(os.name)\n").unwrap();
/// fs::write(dir.path().join("b.js"), "// noop\n").unwrap();
///
/// let index = ExtensionIndex::builtin().unwrap();
/// let filter = FilterConfig::new().query(".py");
/// let result = count_directory(dir.path(), &index, &filter).unwrap();
///
/// assert_eq!(result.files.len(), 1);
/// assert_eq!(result.category("Python").unwrap().lines, 2);
/// assert_eq!(result.total, 2);
/// ```
pub fn count_directory(
    path: impl AsRef<Path>,
    index: &ExtensionIndex,
    filter: &FilterConfig,
) -> Result<CountResult> {
    let path = path.as_ref();
    let discovery = discover_files(path, filter, index)?;

    let mut result = CountResult::new(path);
    for diagnostic in discovery.diagnostics {
        result.add_diagnostic(diagnostic);
    }

    for file_path in discovery.files {
        let (record, diagnostic) = count_file(file_path, index);
        if let Some(diagnostic) = diagnostic {
            result.add_diagnostic(diagnostic);
        }
        result.add_file(record);
    }

    Ok(result)
}

/// Count and classify a single file.
///
/// The record's category is the language claiming the file's extension, or
/// the extension itself. A read failure keeps the partial count and comes
/// back as the diagnostic.
///
/// # Example
///
/// ```rust
/// use codecountlib::{count_file, ExtensionIndex};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("main.c");
/// fs::write(&file_path, "#include <stdio.h>\nint main() {\n    return 0;\n}\n").unwrap();
///
/// let index = ExtensionIndex::builtin().unwrap();
/// let (record, diagnostic) = count_file(&file_path, &index);
/// assert_eq!(record.lines, 3);
/// assert_eq!(record.language, "C");
/// assert!(diagnostic.is_none());
/// ```
pub fn count_file(
    path: impl Into<PathBuf>,
    index: &ExtensionIndex,
) -> (FileRecord, Option<Diagnostic>) {
    let path = path.into();
    let extension = file_extension(&path).unwrap_or_default();
    let language = index.resolve(&extension);
    let LineCount { lines, diagnostic } = count_significant_lines(&path);

    log::debug!("{}: {} lines ({})", path.display(), lines, language);
    (FileRecord::new(path, extension, language, lines), diagnostic)
}
