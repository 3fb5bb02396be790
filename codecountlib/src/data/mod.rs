//! Data collection: count files and collect statistics.
//!
//! This module handles the second stage of the pipeline - reading the
//! discovered files and aggregating their line counts. It provides:
//!
//! - **Line counting**: the comment-prefix heuristic (`count_significant_lines`)
//! - **Statistics**: `FileRecord`, `CategoryTotal`, `CountResult`
//! - **Counting**: high-level API (`count_directory`, `count_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use codecountlib::data::count_directory;
//!
//! let result = count_directory(".", &index, &filter)?;
//! println!("Total lines of code: {}", result.total);
//! ```

pub mod counter;
pub mod lines;
pub mod stats;

pub use counter::{count_directory, count_file};
pub use lines::{
    count_lines_in_str, count_reader, count_significant_lines, is_significant_line, LineCount,
    COMMENT_MARKERS,
};
pub use stats::{CategoryTotal, CountResult, FileRecord};
