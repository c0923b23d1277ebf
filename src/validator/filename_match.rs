use crate::analyzer::{DeclarationScanner, Declaration};
use crate::error::Result;

use super::{Delimiter, ProjectContext, ValidationResult, Validator, ViolationRecord};

/// Checks that the first type declared in each source file matches the file
/// name without extension. Generic types must carry the flattened parameter
/// suffix in the file name: `Repo<T, K>` lives in `RepoTK.cs`.
///
/// A file with no type declaration passes trivially. The first mismatched
/// file fails the whole check immediately with a single record.
pub struct FilenameMatchValidator {
    scanner: DeclarationScanner,
}

impl FilenameMatchValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: DeclarationScanner::new(),
        }
    }
}

impl Default for FilenameMatchValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for FilenameMatchValidator {
    fn id(&self) -> &'static str {
        "filename_match"
    }

    fn description(&self) -> &'static str {
        "type names match their containing file"
    }

    fn run(&self, ctx: &ProjectContext) -> Result<ValidationResult> {
        for unit in &ctx.sources {
            let Some(decl) = self
                .scanner
                .scan(&unit.text)
                .into_iter()
                .find(Declaration::is_type)
            else {
                continue;
            };

            let canonical = decl.canonical_name();
            if canonical != unit.stem() {
                let record = ViolationRecord::new(
                    self.id(),
                    unit.path.clone(),
                    Some(decl.start_line),
                    format!(
                        "type name '{canonical}' does not match filename '{}' in {}",
                        unit.stem(),
                        unit.path.display()
                    ),
                );
                return Ok(ValidationResult::fail(
                    self.id(),
                    "Filename match validation failed",
                    Delimiter::Comma,
                    vec![record],
                ));
            }
        }

        Ok(ValidationResult::pass(self.id()))
    }
}

#[cfg(test)]
#[path = "filename_match_tests.rs"]
mod tests;
