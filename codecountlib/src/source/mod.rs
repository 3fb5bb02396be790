//! Source discovery: decide which files to count.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Classification**: the extension → language table (`ExtensionIndex`)
//! - **Filtering**: extension queries and exclude globs (`FilterConfig`)
//! - **Discovery**: a deterministic recursive walk (`discover_files`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use codecountlib::source::{discover_files, ExtensionIndex, FilterConfig};
//!
//! let index = ExtensionIndex::builtin()?;
//! let filter = FilterConfig::new().query(".rs, .toml");
//! let discovery = discover_files(".", &filter, &index)?;
//! ```

pub mod filter;
pub mod languages;

pub use filter::{discover_files, file_extension, Discovery, ExtensionFilter, FilterConfig};
pub use languages::{normalize_extension, ExtensionIndex, LanguageEntry, BUILTIN_LANGUAGES};
