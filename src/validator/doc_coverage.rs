use regex::Regex;

use crate::analyzer::{CommentStripper, is_doc_comment_line};
use crate::error::Result;

use super::{Delimiter, ProjectContext, ValidationResult, Validator, ViolationRecord};

/// Checks that every public or protected member is documented: the nearest
/// preceding non-blank line must be a `///` documentation comment. Any other
/// nearest non-blank line, code or plain comment, means undocumented, even
/// when a documentation comment exists further above.
pub struct DocCoverageValidator {
    member_pattern: Regex,
}

impl DocCoverageValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            member_pattern: Regex::new(
                r"\b(?:public|protected)\s+(?:class|interface|struct|enum|delegate|void|\w+)\s+\w+",
            )
            .expect("Invalid regex"),
        }
    }
}

impl Default for DocCoverageValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nearest preceding non-blank raw line must be a `///` comment.
fn has_doc_above(lines: &[String], member_idx: usize) -> bool {
    lines[..member_idx]
        .iter()
        .rev()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|l| is_doc_comment_line(l))
}

impl Validator for DocCoverageValidator {
    fn id(&self) -> &'static str {
        "doc_coverage"
    }

    fn description(&self) -> &'static str {
        "every public member is documented"
    }

    fn run(&self, ctx: &ProjectContext) -> Result<ValidationResult> {
        let mut missing = Vec::new();

        for unit in &ctx.sources {
            // Member lines are found on stripped text so commented-out code
            // never counts; the doc lookup walks the raw lines, where the
            // `///` markers still exist. Line numbers agree because the
            // stripper preserves line count.
            let stripped = CommentStripper::strip(&unit.text);
            for (i, line) in stripped.lines().enumerate() {
                if !self.member_pattern.is_match(line) {
                    continue;
                }
                if !has_doc_above(&unit.lines, i) {
                    missing.push(ViolationRecord::new(
                        self.id(),
                        unit.path.clone(),
                        Some(i + 1),
                        format!(
                            "{}: line {} - {}",
                            unit.file_name(),
                            i + 1,
                            unit.lines[i].trim()
                        ),
                    ));
                }
            }
        }

        if missing.is_empty() {
            Ok(ValidationResult::pass(self.id()))
        } else {
            Ok(ValidationResult::fail(
                self.id(),
                "Documentation validation failed: missing documentation for the following members",
                Delimiter::Newline,
                missing,
            ))
        }
    }
}

#[cfg(test)]
#[path = "doc_coverage_tests.rs"]
mod tests;
