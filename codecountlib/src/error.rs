//! Error types for codecountlib

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors that abort a counting run.
///
/// Problems with individual files or directories are not errors: they are
/// recorded as [`Diagnostic`](crate::Diagnostic)s and the run continues.
#[derive(Error, Debug)]
pub enum CodecountError {
    /// Failed to read the language configuration file
    #[error("failed to read language configuration '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Language configuration is not valid JSON or has the wrong shape
    #[error("failed to parse language configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),
}

/// Which stage of a run produced a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A directory or entry could not be read while walking the tree
    Discovery,
    /// A file could not be opened or failed part way through reading
    FileRead,
}

/// A non-fatal problem recorded during a run.
///
/// The run keeps going: an unreadable directory contributes no files and an
/// unreadable file contributes whatever was counted before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Path the problem is about (may be empty when the walker cannot tell)
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn discovery(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self {
            kind: DiagnosticKind::Discovery,
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn file_read(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self {
            kind: DiagnosticKind::FileRead,
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Serialize a path as a string, replacing invalid UTF-8.
///
/// File names on unix are arbitrary bytes; a report must not fail on them.
pub(crate) fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.kind {
            DiagnosticKind::Discovery => "error when searching for files",
            DiagnosticKind::FileRead => "error when counting lines",
        };
        write!(f, "{} in '{}': {}", stage, self.path.display(), self.message)
    }
}
