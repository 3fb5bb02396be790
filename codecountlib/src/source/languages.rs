//! Language classification: map file extensions to language names.
//!
//! The mapping is loaded once from a JSON list of language entries, either the
//! table embedded in the library or a user-supplied file, and frozen into an
//! [`ExtensionIndex`]. The index is passed by reference into discovery and
//! counting; nothing here is global.
//!
//! ## Example
//!
//! ```rust
//! use codecountlib::ExtensionIndex;
//!
//! let index = ExtensionIndex::from_json(r#"[
//!     { "name": "Python", "extensions": [".py"] },
//!     { "name": "Shell", "extensions": ["sh", "bash"] }
//! ]"#).unwrap();
//!
//! assert_eq!(index.language_for("py"), Some("Python"));
//! assert_eq!(index.resolve("bash"), "Shell");
//! assert_eq!(index.resolve("foo"), "foo");
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CodecountError;
use crate::Result;

/// The language table shipped with the library.
pub const BUILTIN_LANGUAGES: &str = include_str!("../../languages.json");

/// A named language and the file extensions that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Human-readable name used as the report category (e.g. "C#")
    #[serde(alias = "Name")]
    pub name: String,
    /// Extensions, lowercase and without the leading dot once normalized
    #[serde(alias = "Extensions", default)]
    pub extensions: Vec<String>,
}

impl LanguageEntry {
    /// Create an entry, normalizing every extension.
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| normalize_extension(e)).collect(),
        }
    }
}

/// Normalize an extension token: trimmed, no leading dot, lowercase.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Read-only lookup from extension to language name.
///
/// Built from an ordered list of [`LanguageEntry`]. Entries without
/// extensions are ignored, and when two entries claim the same extension the
/// one registered first keeps it.
#[derive(Debug, Clone, Default)]
pub struct ExtensionIndex {
    by_extension: HashMap<String, String>,
    languages: Vec<LanguageEntry>,
}

impl ExtensionIndex {
    /// Build an index from language entries, in order.
    pub fn new(entries: impl IntoIterator<Item = LanguageEntry>) -> Self {
        let mut index = Self::default();

        for entry in entries {
            let name = entry.name.trim().to_string();
            let mut extensions = Vec::new();

            for ext in &entry.extensions {
                let ext = normalize_extension(ext);
                if ext.is_empty() || index.by_extension.contains_key(&ext) {
                    continue;
                }
                index.by_extension.insert(ext.clone(), name.clone());
                extensions.push(ext);
            }

            if extensions.is_empty() {
                log::debug!("language '{}' contributes no extensions, skipped", name);
                continue;
            }

            index.languages.push(LanguageEntry { name, extensions });
        }

        index
    }

    /// Index built from the embedded language table.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LANGUAGES)
    }

    /// Parse a JSON array of `{ "name": ..., "extensions": [...] }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<LanguageEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Load a language table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CodecountError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Language name for an extension as found on disk, if the extension is
    /// known.
    ///
    /// Only a leading dot is ignored. Table extensions are lowercase, so
    /// `PY` is not `py`.
    pub fn language_for(&self, ext: &str) -> Option<&str> {
        self.by_extension
            .get(ext.trim_start_matches('.'))
            .map(String::as_str)
    }

    /// Category for an extension: the language name, or the extension
    /// itself (without the dot) when no language claims it.
    pub fn resolve(&self, ext: &str) -> String {
        match self.language_for(ext) {
            Some(name) => name.to_string(),
            None => ext.trim_start_matches('.').to_string(),
        }
    }

    /// Whether any language claims this exact extension.
    pub fn is_known(&self, ext: &str) -> bool {
        self.by_extension.contains_key(ext.trim_start_matches('.'))
    }

    /// All known extensions, sorted.
    pub fn extensions(&self) -> BTreeSet<&str> {
        self.by_extension.keys().map(String::as_str).collect()
    }

    /// Languages that made it into the index, in registration order.
    ///
    /// Each entry lists only the extensions it actually owns.
    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    /// Number of known extensions.
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}
