//! Significant-line counting.
//!
//! A line is significant when, after trimming, it is not empty and does not
//! start with one of [`COMMENT_MARKERS`]. The test is a plain prefix check on
//! each line in isolation:
//!
//! - there is no block-comment state, so the body of a `/* ... */` block only
//!   drops out when each of its lines starts with a marker (usually `*`);
//! - markers are the same for every language, so a `#include` in C or a
//!   `#[derive]` in Rust is treated as a comment just like `# note` in Python;
//! - string literals are not recognized.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::Diagnostic;

/// Line prefixes treated as comments, checked in this order.
pub const COMMENT_MARKERS: [&str; 8] = ["///", "//", "/*", "*/", "-->", "<!--", "#", "*"];

/// Whether a single line counts as a line of code.
pub fn is_significant_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !COMMENT_MARKERS.iter().any(|m| line.starts_with(m))
}

/// Result of counting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCount {
    /// Significant lines read before the end of the file or the first error
    pub lines: u64,
    /// Set when the file could not be opened or read to the end
    pub diagnostic: Option<Diagnostic>,
}

/// Count significant lines from a reader.
///
/// Stops at the first read error (including invalid UTF-8) and returns the
/// lines counted so far together with that error.
pub fn count_reader<R: BufRead>(reader: R) -> (u64, Option<io::Error>) {
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => return (count, Some(e)),
        };
        let line = if index == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            &line
        };
        if is_significant_line(line) {
            count += 1;
        }
    }

    (count, None)
}

/// Count significant lines in an in-memory string.
pub fn count_lines_in_str(text: &str) -> u64 {
    count_reader(text.as_bytes()).0
}

/// Count significant lines in a file.
///
/// Open and read failures never abort: the count accumulated so far (zero
/// if the file could not be opened) comes back with a diagnostic naming the
/// file and the error.
pub fn count_significant_lines(path: impl AsRef<Path>) -> LineCount {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let diagnostic = Diagnostic::file_read(path, e);
            log::warn!("{}", diagnostic);
            return LineCount {
                lines: 0,
                diagnostic: Some(diagnostic),
            };
        }
    };

    let (lines, error) = count_reader(BufReader::new(file));
    let diagnostic = error.map(|e| Diagnostic::file_read(path, e));
    if let Some(ref d) = diagnostic {
        log::warn!("{}", d);
    }

    LineCount { lines, diagnostic }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagnosticKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_blank_lines_are_not_counted() {
        assert_eq!(count_lines_in_str(""), 0);
        assert_eq!(count_lines_in_str("\n\n   \n\t\n"), 0);
    }

    #[test]
    fn test_every_marker_is_a_comment() {
        let text = "/// doc\n// line\n/* open\n*/\n--> end\n<!-- html\n# hash\n* star\n";
        assert_eq!(count_lines_in_str(text), 0);
    }

    #[test]
    fn test_markers_after_indentation() {
        let text = "    // indented\n\t# tabbed\n   * continued\n";
        assert_eq!(count_lines_in_str(text), 0);
    }

    #[test]
    fn test_mixed_file() {
        let text = r#"// header
using System;

namespace Demo
{
    /* block */
    public class A
    {
        # region
        int x = 1; // trailing comment still counts
    }
}
"#;
        // using, namespace, {, public class, {, int x, }, }
        assert_eq!(count_lines_in_str(text), 8);
    }

    #[test]
    fn test_marker_must_be_a_prefix() {
        assert!(is_significant_line("x = 1  # comment"));
        assert!(is_significant_line("a // b"));
        assert!(is_significant_line("return a*b;"));
        assert!(!is_significant_line("#!/usr/bin/env python"));
    }

    #[test]
    fn test_block_comment_body_without_marker_counts() {
        // Known limitation: no state is kept between lines
        let text = "/*\n  plain text inside a block\n*/\n";
        assert_eq!(count_lines_in_str(text), 1);
    }

    #[test]
    fn test_crlf_and_bom() {
        let text = "\u{feff}// header\r\nfn main() {}\r\n\r\n";
        assert_eq!(count_lines_in_str(text), 1);
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("a.py");
        fs::write(&path, "# comment\nimport os\n\nprint(os.getcwd())\n").unwrap();

        let count = count_significant_lines(&path);
        assert_eq!(count.lines, 2);
        assert!(count.diagnostic.is_none());
    }

    #[test]
    fn test_missing_file_reports_diagnostic() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.py");

        let count = count_significant_lines(&path);
        assert_eq!(count.lines, 0);
        let diagnostic = count.diagnostic.unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::FileRead);
        assert_eq!(diagnostic.path, path);
    }

    #[test]
    fn test_invalid_utf8_keeps_partial_count() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("binary.js");
        let mut bytes = b"let a = 1;\nlet b = 2;\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, 0x00, b'\n']);
        bytes.extend_from_slice(b"let c = 3;\n");
        fs::write(&path, bytes).unwrap();

        let count = count_significant_lines(&path);
        assert_eq!(count.lines, 2);
        assert!(count.diagnostic.is_some());
    }

    #[test]
    fn test_directory_is_a_read_error() {
        let temp = tempdir().unwrap();

        let count = count_significant_lines(temp.path());
        assert_eq!(count.lines, 0);
        assert!(count.diagnostic.is_some());
    }
}
