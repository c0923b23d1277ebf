use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{ConventionGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Filter for source discovery: keeps `.cs` files, drops generated files by
/// suffix, anything under a build output directory, and user exclude globs.
pub struct SourceFilter {
    generated_suffixes: Vec<String>,
    build_dirs: Vec<String>,
    exclude_patterns: GlobSet,
}

impl SourceFilter {
    pub const SOURCE_EXTENSION: &'static str = "cs";

    /// Build a filter from scanner configuration.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn from_config(config: &ScannerConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|e| ConventionGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| ConventionGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            generated_suffixes: config
                .generated_suffixes
                .iter()
                .map(|s| s.to_ascii_lowercase())
                .collect(),
            build_dirs: config.build_dirs.clone(),
            exclude_patterns,
        })
    }

    fn has_source_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == Self::SOURCE_EXTENSION)
    }

    /// Generated-file suffixes match case-insensitively, and a file consisting
    /// of nothing but the suffix still counts as generated.
    fn is_generated(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(str::to_ascii_lowercase)
            .is_some_and(|name| self.generated_suffixes.iter().any(|s| name.ends_with(s)))
    }

    fn in_build_dir(&self, path: &Path) -> bool {
        path.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|n| self.build_dirs.iter().any(|d| d == n))
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for SourceFilter {
    fn should_include(&self, path: &Path) -> bool {
        Self::has_source_extension(path)
            && !self.is_generated(path)
            && !self.in_build_dir(path)
            && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
