use std::path::PathBuf;

use indexmap::IndexMap;

use crate::analyzer::DeclarationScanner;
use crate::error::Result;

use super::{Delimiter, ProjectContext, ValidationResult, Validator, ViolationRecord};

/// Checks that every qualifying method name appears somewhere in the test
/// sources. A method is covered when any test line contains its name as a
/// substring, so `RunAsync` in a test covers a method named `Run`; this
/// over-approximation is deliberate and kept.
pub struct MethodPresenceValidator {
    scanner: DeclarationScanner,
}

impl MethodPresenceValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scanner: DeclarationScanner::new(),
        }
    }
}

impl Default for MethodPresenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for MethodPresenceValidator {
    fn id(&self) -> &'static str {
        "method_presence"
    }

    fn description(&self) -> &'static str {
        "every public method name appears in a test"
    }

    fn run(&self, ctx: &ProjectContext) -> Result<ValidationResult> {
        // First occurrence of each (type, method) pair, in scan order.
        let mut pairs: IndexMap<(String, String), (PathBuf, usize)> = IndexMap::new();

        for unit in &ctx.sources {
            for decl in self.scanner.scan(&unit.text) {
                if decl.is_method()
                    && let Some(owner) = decl.owner_type.clone()
                {
                    pairs
                        .entry((owner, decl.name))
                        .or_insert((unit.path.clone(), decl.start_line));
                }
            }
        }

        let missing: Vec<ViolationRecord> = pairs
            .iter()
            .filter(|((_, method), _)| {
                !ctx.tests
                    .iter()
                    .any(|t| t.lines.iter().any(|l| l.contains(method.as_str())))
            })
            .map(|((owner, method), (file, line))| {
                ViolationRecord::new(
                    self.id(),
                    file.clone(),
                    Some(*line),
                    format!("{owner}.{method}"),
                )
            })
            .collect();

        if missing.is_empty() {
            Ok(ValidationResult::pass(self.id()))
        } else {
            Ok(ValidationResult::fail(
                self.id(),
                "Test method presence validation failed: the following methods are missing corresponding test methods",
                Delimiter::Comma,
                missing,
            ))
        }
    }
}

#[cfg(test)]
#[path = "method_presence_tests.rs"]
mod tests;
