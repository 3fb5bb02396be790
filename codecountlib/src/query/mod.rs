//! Query processing: label, sort and summarize counted data.
//!
//! This module handles the third stage of the pipeline - transforming a raw
//! `CountResult` into the two report views. It provides:
//!
//! - **Options**: which views to build and how files are labeled
//! - **QuerySets**: the per-file and per-category views, already sorted
//!
//! ## Example
//!
//! ```rust,ignore
//! use codecountlib::query::{CategoryQuerySet, FileLabel, FileQuerySet};
//!
//! let files = FileQuerySet::from_result(&result, FileLabel::Short);
//! let summary = CategoryQuerySet::from_result(&result);
//! ```

pub mod options;
pub mod queryset;

pub use options::{FileLabel, Views};
pub use queryset::{percentage, CategoryItem, CategoryQuerySet, FileItem, FileQuerySet};
