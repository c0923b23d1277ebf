use crate::error::Result;

use super::{Delimiter, ProjectContext, ValidationResult, Validator, ViolationRecord};

/// Flags unresolved TODO / FIXME markers in line comments, case-insensitively.
///
/// There is no literal awareness: a `//` sequence inside a string literal is
/// treated as a comment start, so a marker inside the literal is still
/// flagged. Carried as a documented limitation.
pub struct TodoFixmeValidator;

impl Validator for TodoFixmeValidator {
    fn id(&self) -> &'static str {
        "todo_fixme"
    }

    fn description(&self) -> &'static str {
        "no unresolved TODO/FIXME markers remain"
    }

    fn run(&self, ctx: &ProjectContext) -> Result<ValidationResult> {
        let mut found = Vec::new();

        for unit in &ctx.sources {
            for (i, line) in unit.lines.iter().enumerate() {
                let Some(pos) = line.find("//") else {
                    continue;
                };
                let comment = line[pos..].to_ascii_lowercase();
                if comment.contains("todo") || comment.contains("fixme") {
                    found.push(ViolationRecord::new(
                        self.id(),
                        unit.path.clone(),
                        Some(i + 1),
                        format!("{}:{}: {}", unit.path.display(), i + 1, line.trim()),
                    ));
                }
            }
        }

        if found.is_empty() {
            Ok(ValidationResult::pass(self.id()))
        } else {
            Ok(ValidationResult::fail(
                self.id(),
                "TODO/FIXME validation failed: unresolved markers found",
                Delimiter::Newline,
                found,
            ))
        }
    }
}

#[cfg(test)]
#[path = "todo_fixme_tests.rs"]
mod tests;
