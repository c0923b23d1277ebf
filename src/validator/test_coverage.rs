use indexmap::IndexSet;

use crate::analyzer::{DeclarationScanner, Declaration};
use crate::error::Result;

use super::{Delimiter, ProjectContext, ValidationResult, Validator, ViolationRecord};

/// Checks that every logic type (a type owning at least one method
/// declaration) appears, by canonical name, as a substring of at least one
/// test file name.
///
/// Substring matching is a documented over-approximation: a type name
/// embedded in an unrelated test file name counts as covered. Each uncovered
/// type yields exactly one entry regardless of how many methods it owns.
pub struct TestCoverageValidator {
    scanner: DeclarationScanner,
}

impl TestCoverageValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: DeclarationScanner::new(),
        }
    }
}

impl Default for TestCoverageValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// File stems never subjected to coverage: entry points and assembly plumbing.
fn is_coverage_exempt(stem: &str) -> bool {
    stem == "Program" || stem.contains("Assembly") || stem.contains("GlobalUsings")
}

/// Types that own at least one method declaration in the same unit.
fn logic_types(decls: &[Declaration]) -> impl Iterator<Item = &Declaration> {
    decls.iter().filter(|d| d.is_type()).filter(|ty| {
        decls
            .iter()
            .any(|m| m.is_method() && m.owner_type.as_deref() == Some(ty.name.as_str()))
    })
}

impl Validator for TestCoverageValidator {
    fn id(&self) -> &'static str {
        "test_coverage"
    }

    fn description(&self) -> &'static str {
        "every logic type has a matching test"
    }

    fn run(&self, ctx: &ProjectContext) -> Result<ValidationResult> {
        let mut uncovered = Vec::new();
        let mut seen = IndexSet::new();

        for unit in &ctx.sources {
            if is_coverage_exempt(unit.stem()) {
                continue;
            }

            let decls = self.scanner.scan(&unit.text);
            for ty in logic_types(&decls) {
                let canonical = ty.canonical_name();
                if !seen.insert(canonical.clone()) {
                    continue;
                }

                let covered = ctx.tests.iter().any(|t| t.file_name().contains(&canonical));
                if !covered {
                    uncovered.push(ViolationRecord::new(
                        self.id(),
                        unit.path.clone(),
                        Some(ty.start_line),
                        canonical,
                    ));
                }
            }
        }

        if uncovered.is_empty() {
            Ok(ValidationResult::pass(self.id()))
        } else {
            Ok(ValidationResult::fail(
                self.id(),
                "Test coverage validation failed: missing unit tests for",
                Delimiter::Comma,
                uncovered,
            ))
        }
    }
}

#[cfg(test)]
#[path = "test_coverage_tests.rs"]
mod tests;
