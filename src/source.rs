use std::path::{Path, PathBuf};

use crate::error::{ConventionGuardError, Result};

/// A source file loaded into memory: path, raw text, and line array.
/// Immutable once loaded; the same units are shared by every validator in a
/// run, so each file tree is read from disk exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
    pub lines: Vec<String>,
}

impl SourceUnit {
    /// Read a file into a unit.
    ///
    /// # Errors
    /// Returns a `FileRead` error naming the path when the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|source| ConventionGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_parts(path.to_path_buf(), text))
    }

    #[must_use]
    pub fn from_parts(path: PathBuf, text: String) -> Self {
        let lines = text.lines().map(str::to_string).collect();
        Self { path, text, lines }
    }

    /// File name without extension, empty when the path has no stem.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|s| s.to_str()).unwrap_or("")
    }
}

/// Load every path into a `SourceUnit`, sorted by path so reports are
/// deterministic across runs.
///
/// # Errors
/// Returns the first read error encountered.
pub fn load_units(mut paths: Vec<PathBuf>) -> Result<Vec<SourceUnit>> {
    paths.sort();
    paths.iter().map(|p| SourceUnit::load(p)).collect()
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
