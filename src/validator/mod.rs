mod doc_coverage;
mod filename_match;
mod manifest;
mod method_presence;
mod test_coverage;
mod todo_fixme;

pub use doc_coverage::DocCoverageValidator;
pub use filename_match::FilenameMatchValidator;
pub use manifest::ManifestSettingValidator;
pub use method_presence::MethodPresenceValidator;
pub use test_coverage::TestCoverageValidator;
pub use todo_fixme::TodoFixmeValidator;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::source::SourceUnit;

/// Everything a validator may look at: the loaded project sources, the loaded
/// test sources, the manifest path, and the effective configuration. Each
/// file tree is read exactly once per run and shared across validators.
pub struct ProjectContext {
    pub solution_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub sources: Vec<SourceUnit>,
    pub tests: Vec<SourceUnit>,
    pub config: Config,
}

/// A convention check. Implementations are pure: they collect every violation
/// of their own kind before reporting, and never print or exit themselves.
pub trait Validator {
    /// Stable identifier used in reports.
    fn id(&self) -> &'static str;

    /// Short description rendered next to the id.
    fn description(&self) -> &'static str;

    /// Run the check against the project context.
    ///
    /// # Errors
    /// Returns an error only for environment failures (unreadable files and
    /// the like). Convention violations ride in the returned result.
    fn run(&self, ctx: &ProjectContext) -> Result<ValidationResult>;
}

/// Separator used when joining a validator's violations into its aggregated
/// failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Newline,
}

impl Delimiter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ", ",
            Self::Newline => "\n",
        }
    }
}

/// One detected breach of a convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationRecord {
    pub validator_id: &'static str,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub message: String,
}

impl ViolationRecord {
    #[must_use]
    pub const fn new(
        validator_id: &'static str,
        file: PathBuf,
        line: Option<usize>,
        message: String,
    ) -> Self {
        Self {
            validator_id,
            file,
            line,
            message,
        }
    }
}

/// Outcome of one validator invocation: the ordered violations it collected
/// plus any non-fatal warnings for the renderer to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub validator_id: &'static str,
    pub violations: Vec<ViolationRecord>,
    pub warnings: Vec<String>,
    headline: String,
    delimiter: Delimiter,
}

impl ValidationResult {
    #[must_use]
    pub const fn pass(validator_id: &'static str) -> Self {
        Self {
            validator_id,
            violations: Vec::new(),
            warnings: Vec::new(),
            headline: String::new(),
            delimiter: Delimiter::Comma,
        }
    }

    #[must_use]
    pub fn fail(
        validator_id: &'static str,
        headline: impl Into<String>,
        delimiter: Delimiter,
        violations: Vec<ViolationRecord>,
    ) -> Self {
        Self {
            validator_id,
            violations,
            warnings: Vec::new(),
            headline: headline.into(),
            delimiter,
        }
    }

    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// The single aggregated failure message, `None` when the validator passed.
    #[must_use]
    pub fn failure_message(&self) -> Option<String> {
        if self.is_passed() {
            return None;
        }
        let joined = self
            .violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join(self.delimiter.as_str());
        Some(match self.delimiter {
            Delimiter::Comma => format!("{}: {joined}.", self.headline),
            Delimiter::Newline => format!("{}:\n{joined}", self.headline),
        })
    }
}

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
